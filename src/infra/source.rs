//! # Matrix Source Module / 矩阵来源模块
//!
//! Acquires the raw matrix document and parses it into a `MatrixSpec`.
//! The source is an injected collaborator so the expansion algorithm can be
//! tested against in-memory fixtures instead of invoking any external
//! tooling.
//!
//! 获取原始矩阵文档并将其解析为 `MatrixSpec`。
//! 来源是一个注入的协作者，因此展开算法可以针对内存中的
//! 测试数据进行测试，而无需调用任何外部工具。

use crate::core::models::MatrixSpec;
use crate::infra::command;
use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default workflow file the matrix is extracted from.
pub const DEFAULT_WORKFLOW: &str = ".github/workflows/ci.yml";
/// Default job whose `strategy.matrix` block is read.
pub const DEFAULT_JOB: &str = "check-and-test";
/// Default extraction command; the key path and workflow file are appended.
pub const DEFAULT_EXTRACT_CMD: &str = "yq -ojson";

/// Where the matrix document comes from.
/// 矩阵文档的来源。
#[derive(Debug, Clone)]
pub enum MatrixSource {
    /// Extract `.jobs.<job>.strategy.matrix` from a workflow file by
    /// invoking an external YAML-to-JSON tool (`yq` unless overridden).
    /// 通过调用外部 YAML 转 JSON 工具（默认 `yq`）从工作流文件中
    /// 提取 `.jobs.<job>.strategy.matrix`。
    Workflow {
        path: PathBuf,
        job: String,
        extract_cmd: Option<String>,
    },
    /// Read an already-extracted JSON document from a file.
    /// 从文件读取已提取的 JSON 文档。
    JsonFile(PathBuf),
    /// Read the JSON document from standard input.
    /// 从标准输入读取 JSON 文档。
    Stdin,
}

impl MatrixSource {
    /// Fetches the raw document, parses it as JSON and converts it into a
    /// validated `MatrixSpec`. Every failure along the way is fatal to the
    /// caller; a CI-time utility should fail loudly rather than silently
    /// produce a wrong job list.
    ///
    /// 获取原始文档，将其解析为 JSON 并转换为经过验证的 `MatrixSpec`。
    /// 过程中的每个失败对调用者而言都是致命的。
    pub async fn fetch(&self) -> Result<MatrixSpec> {
        let raw = match self {
            Self::Workflow {
                path,
                job,
                extract_cmd,
            } => extract_from_workflow(path, job, extract_cmd.as_deref()).await?,
            Self::JsonFile(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read matrix document {}", path.display()))?,
            Self::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read matrix document from stdin")?;
                buffer
            }
        };

        let document: Value =
            serde_json::from_str(&raw).context("matrix document is not valid JSON")?;
        MatrixSpec::try_from(document)
    }
}

/// Runs the extraction command against the workflow file and returns its
/// JSON output.
async fn extract_from_workflow(
    path: &Path,
    job: &str,
    extract_cmd: Option<&str>,
) -> Result<String> {
    let argv = extraction_argv(path, job, extract_cmd)?;
    let (program, args) = match argv.split_first() {
        Some((program, args)) => (program.clone(), args.to_vec()),
        None => bail!("extraction command is empty"),
    };
    command::run_and_capture(&program, &args).await
}

/// Builds the argument vector for the extraction invocation:
/// the base command, then the key path, then the workflow file.
///
/// A user-supplied override is split with shell-like word rules, so a quoted
/// tool path survives intact.
///
/// 构建提取调用的参数向量：基础命令、键路径、工作流文件。
/// 用户提供的覆盖命令按类 shell 的分词规则拆分。
pub fn extraction_argv(path: &Path, job: &str, extract_cmd: Option<&str>) -> Result<Vec<String>> {
    let raw = extract_cmd.unwrap_or(DEFAULT_EXTRACT_CMD);
    let mut argv =
        shlex::split(raw).ok_or_else(|| anyhow!("could not parse extraction command: {raw}"))?;
    if argv.is_empty() {
        bail!("extraction command is empty");
    }
    argv.push(format!(".jobs.{job}.strategy.matrix"));
    argv.push(path.display().to_string());
    Ok(argv)
}
