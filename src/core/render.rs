//! # Job-Name Rendering Module / 任务名称渲染模块
//!
//! This module turns expanded configurations into the job-name strings used
//! downstream, e.g. to reference generated report artifacts. The expansion
//! algorithm is fully general over arbitrary axes; only the renderer knows
//! concrete axis names, so rendering is a pluggable step behind the
//! `JobNameRenderer` trait.
//!
//! 此模块将展开后的配置转换为下游使用的任务名称字符串。
//! 展开算法对任意轴完全通用；只有渲染器知道具体的轴名称，
//! 因此渲染是 `JobNameRenderer` trait 背后的可插拔步骤。

use crate::core::models::{AxisValue, Configuration};
use anyhow::{Result, anyhow};

/// The artifact prefix the coverage workflow uses.
pub const DEFAULT_PREFIX: &str = "code-coverage-report";

/// Renders one configuration into its job-name string.
/// 将一个配置渲染为其任务名称字符串。
pub trait JobNameRenderer {
    fn render(&self, configuration: &Configuration) -> Result<String>;
}

/// Renders the coverage-report artifact name for a configuration over the
/// `os`, `rust` and `rustc_bootstrap` axes.
///
/// The `-bootstrap` suffix is omitted when the toolchain is `nightly`
/// (nightly never needs the bootstrap escape hatch) or when the
/// `rustc_bootstrap` flag is `"0"`.
///
/// 为包含 `os`、`rust` 和 `rustc_bootstrap` 轴的配置渲染覆盖率报告产物名称。
/// 当工具链为 `nightly` 或 `rustc_bootstrap` 标志为 `"0"` 时省略
/// `-bootstrap` 后缀。
#[derive(Debug, Clone)]
pub struct CoverageReportRenderer {
    prefix: String,
}

impl CoverageReportRenderer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for CoverageReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl JobNameRenderer for CoverageReportRenderer {
    fn render(&self, configuration: &Configuration) -> Result<String> {
        let os = axis(configuration, "os")?;
        let rust = axis(configuration, "rust")?;
        let rustc_bootstrap = axis(configuration, "rustc_bootstrap")?;

        let suffix = if rust.as_str() == "nightly" || rustc_bootstrap.as_str() == "0" {
            ""
        } else {
            "-bootstrap"
        };

        Ok(format!("{}-{}-{}{}", self.prefix, rust, os, suffix))
    }
}

/// Looks up a required axis, failing with the axis name if it is absent.
fn axis<'a>(configuration: &'a Configuration, name: &str) -> Result<&'a AxisValue> {
    configuration
        .get(name)
        .ok_or_else(|| anyhow!("configuration does not assign a value to axis `{name}`"))
}

/// Renders every configuration in order, stopping at the first failure.
/// 按顺序渲染每个配置，在第一个失败处停止。
pub fn render_all(
    renderer: &impl JobNameRenderer,
    configurations: &[Configuration],
) -> Result<Vec<String>> {
    configurations
        .iter()
        .map(|configuration| renderer.render(configuration))
        .collect()
}
