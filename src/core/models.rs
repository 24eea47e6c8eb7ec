//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout Matrix Jobs:
//! the matrix specification parsed from a workflow file, the scalar axis
//! values it contains, and the concrete job configurations produced by
//! expansion.
//!
//! 此模块定义了整个 Matrix Jobs 中使用的核心数据结构：
//! 从工作流文件解析出的矩阵规格、其中包含的标量轴值，
//! 以及展开产生的具体任务配置。

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A single scalar value on a matrix axis.
///
/// Workflow matrices carry strings, booleans and numbers; all of them
/// stringify losslessly, so the value is normalized to its string form at the
/// boundary (`true`/`false` for booleans, the JSON text for numbers).
/// Arrays, objects and `null` are rejected.
///
/// 矩阵轴上的单个标量值。
/// 工作流矩阵包含字符串、布尔值和数字；它们都可以无损地转换为字符串，
/// 因此该值在边界处被规范化为其字符串形式。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AxisValue(String);

impl AxisValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&Value> for AxisValue {
    type Error = anyhow::Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            Value::Bool(b) => Ok(Self(b.to_string())),
            // serde_json renders numbers exactly as they appeared in the document.
            // serde_json 会按照数字在文档中出现的形式精确渲染。
            Value::Number(n) => Ok(Self(n.to_string())),
            other => bail!(
                "expected a scalar matrix value (string, boolean or number), got {}",
                json_type_name(other)
            ),
        }
    }
}

/// One `include`/`exclude` entry: a mapping from axis name to the value the
/// override assigns to it.
/// 一条 `include`/`exclude` 记录：从轴名称到该覆盖项为其指定的值的映射。
pub type OverrideRecord = BTreeMap<String, AxisValue>;

/// The declarative build matrix as a CI system defines it: a set of named
/// axes, each with an ordered list of permissible values, plus explicit
/// `include` and `exclude` override lists applied after combinatorial
/// expansion.
///
/// The axes live in a `BTreeMap`, so the canonical sorted axis-name order
/// falls out of the representation itself.
///
/// 声明式构建矩阵：一组命名的轴（每个轴有一个有序的可选值列表），
/// 以及在组合展开之后应用的显式 `include` 和 `exclude` 覆盖列表。
/// 轴存放在 `BTreeMap` 中，因此规范的轴名称排序由数据结构本身保证。
#[derive(Debug, Clone, Default)]
pub struct MatrixSpec {
    /// Base axes: axis name to its list of values, in canonical key order.
    /// 基础轴：轴名称到其值列表的映射，按规范键顺序排列。
    pub axes: BTreeMap<String, Vec<AxisValue>>,
    /// Configurations force-added to the result after exclusion.
    /// 在排除之后强制加入结果的配置。
    pub include: Vec<OverrideRecord>,
    /// Configurations force-removed from the combinatorial expansion.
    /// 从组合展开中强制移除的配置。
    pub exclude: Vec<OverrideRecord>,
}

impl MatrixSpec {
    /// The canonical axis names, in sorted order.
    pub fn axis_names(&self) -> Vec<String> {
        self.axes.keys().cloned().collect()
    }
}

impl TryFrom<Value> for MatrixSpec {
    type Error = anyhow::Error;

    /// Builds a `MatrixSpec` from the JSON document the extraction command
    /// emits. The `include` and `exclude` keys are pulled out of the mapping
    /// first; every remaining key is a base axis.
    ///
    /// 从提取命令输出的 JSON 文档构建 `MatrixSpec`。
    /// 首先从映射中取出 `include` 和 `exclude` 键；其余每个键都是基础轴。
    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(mut mapping) = value else {
            bail!(
                "matrix document must be a JSON object, got {}",
                json_type_name(&value)
            );
        };

        let exclude = take_override_list(&mut mapping, "exclude")?;
        let include = take_override_list(&mut mapping, "include")?;

        let mut axes = BTreeMap::new();
        for (name, values) in mapping {
            let Value::Array(items) = values else {
                bail!(
                    "axis `{name}` must be an array of scalar values, got {}",
                    json_type_name(&values)
                );
            };
            let parsed = items
                .iter()
                .map(AxisValue::try_from)
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("invalid value on axis `{name}`"))?;
            axes.insert(name, parsed);
        }

        Ok(Self {
            axes,
            include,
            exclude,
        })
    }
}

/// Removes `key` from the mapping and parses it as a list of override
/// records. A missing key yields an empty list.
fn take_override_list(
    mapping: &mut serde_json::Map<String, Value>,
    key: &str,
) -> Result<Vec<OverrideRecord>> {
    match mapping.remove(key) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let Value::Object(fields) = item else {
                    bail!(
                        "`{key}[{index}]` must be an object mapping axis names to values, got {}",
                        json_type_name(item)
                    );
                };
                fields
                    .iter()
                    .map(|(name, value)| {
                        let value = AxisValue::try_from(value).with_context(|| {
                            format!("invalid value for axis `{name}` in `{key}[{index}]`")
                        })?;
                        Ok((name.clone(), value))
                    })
                    .collect()
            })
            .collect(),
        Some(other) => bail!(
            "`{key}` must be an array of override records, got {}",
            json_type_name(&other)
        ),
    }
}

/// One concrete job configuration: exactly one value assigned to every axis.
///
/// Backed by a `BTreeMap`, so equality and ordering compare the (axis name,
/// value) pairs in sorted axis-name order — the canonical tuple comparison
/// that makes set membership and the final output order independent of the
/// key order in the input document.
///
/// 一个具体的任务配置：每个轴恰好被赋予一个值。
/// 底层为 `BTreeMap`，因此相等性和排序按排序后的轴名称顺序比较
/// （轴名称，值）对，这使得集合成员判定和最终输出顺序
/// 与输入文档中的键顺序无关。
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Configuration(BTreeMap<String, AxisValue>);

impl Configuration {
    pub fn get(&self, axis: &str) -> Option<&AxisValue> {
        self.0.get(axis)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, AxisValue)> for Configuration {
    fn from_iter<T: IntoIterator<Item = (String, AxisValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<OverrideRecord> for Configuration {
    fn from(record: OverrideRecord) -> Self {
        Self(record)
    }
}

/// Human-readable JSON type name for error messages.
/// 用于错误消息的人类可读 JSON 类型名称。
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
