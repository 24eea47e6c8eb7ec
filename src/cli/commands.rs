//! # CLI Commands Module / 命令行命令模块
//!
//! One submodule per subcommand.
//! 每个子命令一个子模块。

pub mod expand;
pub mod names;
