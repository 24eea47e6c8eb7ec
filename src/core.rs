//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Matrix Jobs,
//! including the matrix data model, the expansion algorithm and
//! job-name rendering.
//!
//! 此模块包含 Matrix Jobs 的核心功能，
//! 包括矩阵数据模型、展开算法和任务名称渲染。

pub mod models;
pub mod expander;
pub mod render;

// Re-exports
pub use expander::ExpansionPlan;
pub use models::{Configuration, MatrixSpec};
pub use render::JobNameRenderer;
