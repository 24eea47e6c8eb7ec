//! # Matrix Jobs Library / Matrix Jobs 库
//!
//! This library provides the core functionality for the Matrix Jobs tool,
//! which expands a CI workflow's build matrix into the concrete set of job
//! configurations and derives the job name each one produces.
//!
//! 此库为 Matrix Jobs 工具提供核心功能，
//! 它将 CI 工作流的构建矩阵展开为具体的任务配置集合，
//! 并推导出每个配置产生的任务名称。
//!
//! ## Modules / 模块
//!
//! - `core` - Matrix data model, expansion algorithm and job-name rendering
//! - `infra` - Infrastructure services like command execution and matrix acquisition
//! - `reporting` - Console output for expansion results
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 矩阵数据模型、展开算法和任务名称渲染
//! - `infra` - 基础设施服务，如命令执行和矩阵获取
//! - `reporting` - 展开结果的控制台输出
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::expander;
pub use crate::core::models;
pub use crate::core::render;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
