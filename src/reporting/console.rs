//! # Console Reporting Module / 控制台报告模块
//!
//! Prints expansion results to the console. Job names go to stdout as a
//! single comma-joined line, with no trailing separator, so the output can
//! be captured directly into a workflow variable. Everything meant for
//! humans goes to stderr.
//!
//! 将展开结果打印到控制台。任务名称以单行逗号连接的形式输出到
//! stdout，末尾没有分隔符，因此输出可以直接捕获到工作流变量中。
//! 所有面向人类的内容都输出到 stderr。

use crate::core::expander::ExpansionPlan;
use crate::infra::t;
use colored::*;

/// Prints the comma-joined job names as the single stdout line.
/// 将逗号连接的任务名称作为唯一的 stdout 行打印。
pub fn print_job_names(names: &[String]) {
    println!("{}", names.join(","));
}

/// Prints a one-line colored summary of the expansion to stderr.
///
/// 在 stderr 上打印一行彩色的展开摘要。
///
/// # Output Format / 输出格式
/// ```text
/// 8 configurations (8 generated, 0 excluded, 0 added by include)
/// ```
pub fn print_expansion_summary(plan: &ExpansionPlan, locale: &str) {
    let summary = t!(
        "expansion_summary",
        locale = locale,
        total = plan.configurations.len(),
        generated = plan.generated_count,
        excluded = plan.excluded_count,
        included = plan.included_count
    );
    if plan.configurations.is_empty() {
        eprintln!("{}", t!("no_configurations", locale = locale).yellow());
    } else {
        eprintln!("{}", summary.cyan());
    }
}
