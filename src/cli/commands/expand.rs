//! # Expand Command Module / Expand 命令模块
//!
//! This module implements the `expand` command, which prints the expanded
//! configuration set as a JSON array of objects — the shape a workflow can
//! feed straight into `fromJSON` for a dynamic job matrix.
//!
//! 此模块实现 `expand` 命令，将展开后的配置集合打印为 JSON
//! 对象数组——工作流可以直接将这种形式传给 `fromJSON` 以构建动态任务矩阵。

use anyhow::{Context, Result};

use crate::{
    cli::commands::names::announce,
    core::expander,
    infra::source::MatrixSource,
    reporting::console::print_expansion_summary,
};

/// Executes the expand command.
///
/// # Arguments
/// * `source` - Where the matrix document comes from
/// * `pretty` - Whether to pretty-print the JSON output
/// * `locale` - The language locale for console messages
pub async fn execute(source: MatrixSource, pretty: bool, locale: &str) -> Result<()> {
    announce(&source, locale);

    let spec = source.fetch().await?;
    let plan = expander::expand(spec)?;
    print_expansion_summary(&plan, locale);

    let json = if pretty {
        serde_json::to_string_pretty(&plan.configurations)
    } else {
        serde_json::to_string(&plan.configurations)
    }
    .context("failed to serialize expanded configurations")?;

    println!("{json}");
    Ok(())
}
