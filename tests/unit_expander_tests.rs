//! # Expander Module Unit Tests / Expander 模块单元测试
//!
//! This module contains unit tests for the `expander.rs` module: cartesian
//! completeness, exclude/include override semantics, determinism with
//! respect to input key order, and validation of malformed override records.
//!
//! 此模块包含 `expander.rs` 模块的单元测试：笛卡尔完备性、
//! exclude/include 覆盖语义、与输入键顺序无关的确定性，
//! 以及对格式错误的覆盖记录的验证。

use matrix_jobs::expander::{self, ExpansionPlan};
use matrix_jobs::models::{AxisValue, Configuration, MatrixSpec};
use serde_json::json;

fn spec(document: serde_json::Value) -> MatrixSpec {
    MatrixSpec::try_from(document).unwrap()
}

fn expand(document: serde_json::Value) -> ExpansionPlan {
    expander::expand(spec(document)).unwrap()
}

fn config(pairs: &[(&str, &str)]) -> Configuration {
    pairs
        .iter()
        .map(|(axis, value)| (axis.to_string(), AxisValue::new(*value)))
        .collect()
}

#[test]
fn test_cartesian_product_is_complete() {
    let plan = expand(json!({"os": ["a", "b"], "rust": ["x", "y"]}));

    assert_eq!(plan.generated_count, 4);
    assert_eq!(plan.excluded_count, 0);
    assert_eq!(plan.included_count, 0);
    assert_eq!(
        plan.configurations,
        vec![
            config(&[("os", "a"), ("rust", "x")]),
            config(&[("os", "a"), ("rust", "y")]),
            config(&[("os", "b"), ("rust", "x")]),
            config(&[("os", "b"), ("rust", "y")]),
        ]
    );
}

#[test]
fn test_exclude_removes_exactly_the_named_configuration() {
    let plan = expand(json!({
        "os": ["a", "b"],
        "rust": ["x", "y"],
        "exclude": [{"os": "a", "rust": "x"}]
    }));

    assert_eq!(plan.excluded_count, 1);
    assert_eq!(plan.configurations.len(), 3);
    assert!(!plan.configurations.contains(&config(&[("os", "a"), ("rust", "x")])));
}

#[test]
fn test_include_wins_over_exclude_and_adds_new_rows() {
    let plan = expand(json!({
        "os": ["a", "b"],
        "rust": ["x", "y"],
        "exclude": [{"os": "a", "rust": "x"}],
        "include": [
            {"os": "a", "rust": "x"},
            {"os": "c", "rust": "z"}
        ]
    }));

    // The excluded pair comes back through include, plus one wholly new pair.
    assert_eq!(plan.configurations.len(), 5);
    assert!(plan.configurations.contains(&config(&[("os", "a"), ("rust", "x")])));
    assert!(plan.configurations.contains(&config(&[("os", "c"), ("rust", "z")])));
    assert_eq!(plan.included_count, 2);
}

#[test]
fn test_output_is_deterministic_across_input_key_order() {
    let first: serde_json::Value =
        serde_json::from_str(r#"{"rust": ["y", "x"], "os": ["b", "a"]}"#).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(r#"{"os": ["a", "b"], "rust": ["x", "y"]}"#).unwrap();

    let first = expander::expand(MatrixSpec::try_from(first).unwrap()).unwrap();
    let second = expander::expand(MatrixSpec::try_from(second).unwrap()).unwrap();

    assert_eq!(first.configurations, second.configurations);
}

#[test]
fn test_exclude_matching_ignores_record_key_order() {
    let document: serde_json::Value = serde_json::from_str(
        r#"{"os": ["a"], "rust": ["x"], "exclude": [{"rust": "x", "os": "a"}]}"#,
    )
    .unwrap();
    let plan = expander::expand(MatrixSpec::try_from(document).unwrap()).unwrap();

    assert!(plan.configurations.is_empty());
    assert_eq!(plan.excluded_count, 1);
}

#[test]
fn test_empty_axis_values_yield_exactly_the_includes() {
    let plan = expand(json!({
        "os": [],
        "rust": [],
        "exclude": [{"os": "a", "rust": "x"}],
        "include": [{"os": "a", "rust": "x"}]
    }));

    assert_eq!(plan.generated_count, 0);
    assert_eq!(plan.excluded_count, 0);
    assert_eq!(plan.configurations, vec![config(&[("os", "a"), ("rust", "x")])]);
}

#[test]
fn test_empty_axis_without_includes_yields_nothing() {
    let plan = expand(json!({"os": [], "rust": ["x", "y"]}));
    assert!(plan.configurations.is_empty());
}

#[test]
fn test_matrix_without_axes_yields_the_nullary_product() {
    // `product()` over zero axes is one empty combination.
    let plan = expand(json!({}));
    assert_eq!(plan.configurations, vec![Configuration::default()]);
}

#[test]
fn test_duplicate_includes_collapse() {
    let plan = expand(json!({
        "os": ["a"],
        "rust": ["x"],
        "include": [
            {"os": "c", "rust": "z"},
            {"os": "c", "rust": "z"}
        ]
    }));

    assert_eq!(plan.configurations.len(), 2);
    assert_eq!(plan.included_count, 1);
}

#[test]
fn test_include_already_in_the_product_adds_nothing() {
    let plan = expand(json!({
        "os": ["a"],
        "rust": ["x"],
        "include": [{"os": "a", "rust": "x"}]
    }));

    assert_eq!(plan.configurations.len(), 1);
    assert_eq!(plan.included_count, 0);
}

#[test]
fn test_override_record_missing_an_axis_is_rejected() {
    let error = expander::expand(spec(json!({
        "os": ["a"],
        "rust": ["x"],
        "exclude": [{"os": "a"}]
    })))
    .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("`exclude[0]`"));
    assert!(message.contains("missing axis `rust`"));
}

#[test]
fn test_override_record_with_unknown_axis_is_rejected() {
    let error = expander::expand(spec(json!({
        "os": ["a"],
        "rust": ["x"],
        "include": [{"os": "a", "rust": "x", "cpu": "arm"}]
    })))
    .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("`include[0]`"));
    assert!(message.contains("unknown axis `cpu`"));
}
