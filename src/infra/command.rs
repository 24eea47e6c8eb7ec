//! # Command Execution Module / 命令执行模块
//!
//! Runs external commands and captures their output. The only external
//! command Matrix Jobs runs is the extraction tool that pulls the matrix
//! block out of a workflow file, so this stays deliberately small: one
//! blocking call, no retries.
//!
//! 运行外部命令并捕获其输出。Matrix Jobs 运行的唯一外部命令是
//! 从工作流文件中提取矩阵块的工具，因此此模块刻意保持精简：
//! 一次阻塞调用，不重试。

use anyhow::{Context, Result, bail};
use std::process::Stdio;
use tokio::process::Command;

/// Runs a command to completion and returns its stdout as UTF-8 text.
///
/// A spawn failure, a non-zero exit status, or non-UTF-8 output is an error
/// carrying the rendered command line; on non-zero exit the captured stderr
/// is attached so the caller's diagnostic points at the real cause.
///
/// 运行命令直至完成，并将其 stdout 作为 UTF-8 文本返回。
/// 启动失败、非零退出状态或非 UTF-8 输出都是错误，错误中带有
/// 渲染后的命令行；非零退出时附带捕获的 stderr。
pub async fn run_and_capture(program: &str, args: &[String]) -> Result<String> {
    let rendered = render_command(program, args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("failed to execute `{rendered}`"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "`{rendered}` exited with {}:\n{}",
            output.status,
            stderr.trim_end()
        );
    }

    String::from_utf8(output.stdout)
        .with_context(|| format!("`{rendered}` produced non-UTF-8 output"))
}

/// Renders a program and its arguments as a single shell-like string for
/// diagnostics.
/// 将程序及其参数渲染为用于诊断的单个类 shell 字符串。
pub fn render_command(program: &str, args: &[String]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}
