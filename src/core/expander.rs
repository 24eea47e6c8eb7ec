//! # Matrix Expansion Module / 矩阵展开模块
//!
//! This module implements the expansion of a declarative build matrix into
//! the concrete set of job configurations a CI system would run:
//! `final = (cartesian_product(axes) − exclude) ∪ include`.
//!
//! 此模块实现将声明式构建矩阵展开为 CI 系统将运行的具体任务配置集合：
//! `final = (cartesian_product(axes) − exclude) ∪ include`。

use crate::core::models::{AxisValue, Configuration, MatrixSpec, OverrideRecord};
use anyhow::{Result, bail};
use std::collections::{BTreeMap, BTreeSet};

/// The outcome of expanding a matrix specification.
/// 展开矩阵规格的结果。
#[derive(Debug)]
pub struct ExpansionPlan {
    /// The final configurations, sorted by their canonical tuple
    /// representation for deterministic, reproducible output.
    /// 最终的配置集合，按其规范元组表示排序，以保证确定性、可复现的输出。
    pub configurations: Vec<Configuration>,
    /// How many configurations the cartesian product produced.
    /// 笛卡尔积产生了多少个配置。
    pub generated_count: usize,
    /// How many generated configurations the `exclude` list removed.
    /// `exclude` 列表移除了多少个已生成的配置。
    pub excluded_count: usize,
    /// How many configurations the `include` list added on top.
    /// `include` 列表额外加入了多少个配置。
    pub included_count: usize,
}

/// Expands a matrix specification into its final configuration set.
///
/// The cartesian product of the base axes is computed first, then the
/// `exclude` set is subtracted and the `include` set is united in — in that
/// order, so a configuration named in both lists ends up in the result.
/// The returned configurations are sorted canonically.
///
/// 将矩阵规格展开为其最终配置集合。
/// 先计算基础轴的笛卡尔积，然后减去 `exclude` 集合，再并入 `include`
/// 集合——按此顺序执行，因此同时出现在两个列表中的配置会保留在结果中。
///
/// # Errors
/// Fails if any `include`/`exclude` record does not assign a value to
/// exactly the base axis names (a missing or unknown axis key).
pub fn expand(spec: MatrixSpec) -> Result<ExpansionPlan> {
    let keys = spec.axis_names();

    let excluded = override_set(&spec.exclude, &keys, "exclude")?;
    let included = override_set(&spec.include, &keys, "include")?;
    let generated = cartesian_product(&spec.axes);
    let generated_count = generated.len();

    // Difference before union: include wins over exclude.
    // 先做差集再做并集：include 优先于 exclude。
    let mut final_set: BTreeSet<Configuration> =
        generated.difference(&excluded).cloned().collect();
    let excluded_count = generated_count - final_set.len();

    let before_include = final_set.len();
    final_set.extend(included);
    let included_count = final_set.len() - before_include;

    Ok(ExpansionPlan {
        // BTreeSet iterates in sorted order, which is exactly the canonical
        // tuple ordering of `Configuration`.
        configurations: final_set.into_iter().collect(),
        generated_count,
        excluded_count,
        included_count,
    })
}

/// Converts a list of override records into a configuration set, validating
/// that every record assigns a value to exactly the canonical axis names.
///
/// A record with a missing or unknown axis is rejected outright rather than
/// skipped or treated as a wildcard; a silently wrong job list is worse than
/// a loud failure at derivation time.
///
/// 将覆盖记录列表转换为配置集合，并验证每条记录为规范轴名称集合中的
/// 每个轴（且仅这些轴）指定了值。缺失或未知的轴会被直接拒绝。
fn override_set(
    records: &[OverrideRecord],
    keys: &[String],
    list: &str,
) -> Result<BTreeSet<Configuration>> {
    let mut set = BTreeSet::new();
    for (index, record) in records.iter().enumerate() {
        for key in keys {
            if !record.contains_key(key) {
                bail!(
                    "`{list}[{index}]` is missing axis `{key}`; every override record must \
                     assign a value to each of: {}",
                    keys.join(", ")
                );
            }
        }
        for key in record.keys() {
            // `keys` comes from a BTreeMap, so it is sorted.
            if keys.binary_search(key).is_err() {
                bail!(
                    "`{list}[{index}]` names unknown axis `{key}`; the base axes are: {}",
                    keys.join(", ")
                );
            }
        }
        // Duplicate records collapse under set semantics.
        // 重复的记录在集合语义下自然合并。
        set.insert(Configuration::from(record.clone()));
    }
    Ok(set)
}

/// Computes the full cartesian product of the base axes: every combination
/// choosing one value per axis.
///
/// An axis with an empty value list empties the whole product. A matrix with
/// no axes at all yields the single empty combination (the nullary product).
///
/// 计算基础轴的完整笛卡尔积：每个轴选择一个值的所有组合。
/// 值列表为空的轴会使整个乘积为空。完全没有轴的矩阵产生单个空组合。
fn cartesian_product(axes: &BTreeMap<String, Vec<AxisValue>>) -> BTreeSet<Configuration> {
    let mut combinations: Vec<Vec<(String, AxisValue)>> = vec![Vec::new()];
    for (name, values) in axes {
        let mut extended = Vec::with_capacity(combinations.len() * values.len());
        for partial in &combinations {
            for value in values {
                let mut assignment = partial.clone();
                assignment.push((name.clone(), value.clone()));
                extended.push(assignment);
            }
        }
        combinations = extended;
    }
    combinations
        .into_iter()
        .map(|pairs| pairs.into_iter().collect())
        .collect()
}
