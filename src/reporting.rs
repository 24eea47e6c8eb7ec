//! # Reporting Module / 报告模块
//!
//! This module handles the presentation of expansion results: the
//! machine-readable job-name line on stdout and the colored human-readable
//! summary on stderr.
//!
//! 此模块处理展开结果的呈现：stdout 上的机器可读任务名称行，
//! 以及 stderr 上的彩色人类可读摘要。

pub mod console;

// Re-export common reporting functions
pub use console::{print_expansion_summary, print_job_names};
