//! # Names Command Module / Names 命令模块
//!
//! This module implements the `names` command: fetch the matrix, expand it,
//! render every configuration into its job name and print the comma-joined
//! result as a single stdout line.
//!
//! 此模块实现 `names` 命令：获取矩阵，将其展开，把每个配置渲染为
//! 其任务名称，并将逗号连接的结果作为单行输出到 stdout。

use anyhow::Result;
use colored::*;

use crate::{
    core::{
        expander,
        render::{self, CoverageReportRenderer},
    },
    infra::{source::MatrixSource, t},
    reporting::console::{print_expansion_summary, print_job_names},
};

/// Executes the names command.
///
/// # Arguments
/// * `source` - Where the matrix document comes from
/// * `prefix` - The artifact prefix for the rendered job names
/// * `locale` - The language locale for console messages
pub async fn execute(source: MatrixSource, prefix: String, locale: &str) -> Result<()> {
    announce(&source, locale);

    let spec = source.fetch().await?;
    let plan = expander::expand(spec)?;
    print_expansion_summary(&plan, locale);

    let renderer = CoverageReportRenderer::new(prefix);
    let names = render::render_all(&renderer, &plan.configurations)?;
    print_job_names(&names);

    Ok(())
}

/// Tells the user where the matrix is being read from, on stderr.
/// 在 stderr 上告知用户矩阵的读取来源。
pub(crate) fn announce(source: &MatrixSource, locale: &str) {
    let message = match source {
        MatrixSource::Workflow { path, job, .. } => t!(
            "extracting_matrix",
            locale = locale,
            path = path.display(),
            job = job
        ),
        MatrixSource::JsonFile(path) => {
            t!("reading_matrix_file", locale = locale, path = path.display())
        }
        MatrixSource::Stdin => t!("reading_matrix_stdin", locale = locale),
    };
    eprintln!("{}", message.dimmed());
}
