//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Matrix Jobs,
//! including external command execution, matrix acquisition and i18n support.
//!
//! 此模块为 Matrix Jobs 提供基础设施服务，
//! 包括外部命令执行、矩阵获取和国际化支持。

pub mod command;
pub mod source;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
