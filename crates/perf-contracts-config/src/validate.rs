// crates/perf-contracts-config/src/validate.rs
// ============================================================================
// Module: Contract Config Validation
// Description: Exhaustive rule checks over the sparse contract model.
// Purpose: Report every broken rule in one pass.
// Dependencies: perf-contracts-core, thiserror
// ============================================================================

//! ## Overview
//! Validation never stops at the first problem: each rule appends a message
//! naming the offending field, and an empty list means the config is valid.
//! Absent fields are always valid; defaults apply at resolution.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use perf_contracts_core::InteractionKind;
use thiserror::Error;

use crate::config::AggregateContract;
use crate::config::ComponentContract;
use crate::config::ContractConfig;
use crate::config::GlobalConfig;

// ============================================================================
// SECTION: Error
// ============================================================================

/// Batched validation failure.
///
/// # Invariants
/// - `errors` is non-empty and lists messages in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ConfigValidationError {
    /// One message per broken rule.
    pub errors: Vec<String>,
}

impl ConfigValidationError {
    /// Wraps a list of rule messages.
    #[must_use]
    pub const fn new(errors: Vec<String>) -> Self {
        Self {
            errors,
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid contract config: {}", self.errors.join("; "))
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates every rule and returns one message per violation.
#[must_use]
pub fn validate_config(config: &ContractConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(global) = &config.global {
        validate_global(global, &mut errors);
    }
    for (name, contract) in &config.components {
        validate_component(name, contract, &mut errors);
    }
    for (name, aggregate) in &config.aggregates {
        validate_aggregate(name, aggregate, &mut errors);
    }
    errors
}

/// Checks global settings.
fn validate_global(global: &GlobalConfig, errors: &mut Vec<String>) {
    check(errors, "global.runs", global.runs, is_positive_count, COUNT_MESSAGE);
    check(
        errors,
        "global.warmupRuns",
        global.warmup_runs,
        is_non_negative_count,
        "must be an integer between 0 and 4294967295",
    );
    check(
        errors,
        "global.historyWindow",
        global.history_window,
        is_positive_count,
        COUNT_MESSAGE,
    );
    check(
        errors,
        "global.regressionThreshold",
        global.regression_threshold,
        is_fraction,
        "must be between 0 and 1",
    );
    if global.output_dir.as_deref().is_some_and(|dir| dir.trim().is_empty()) {
        errors.push("global.outputDir must be non-empty".to_string());
    }
}

/// Checks one component contract.
fn validate_component(name: &str, contract: &ComponentContract, errors: &mut Vec<String>) {
    let field = |key: &str| format!("components.{name}.{key}");
    check(errors, &field("maxRenderTime"), contract.max_render_time, is_positive, "must be greater than 0");
    check(
        errors,
        &field("maxRenderCount"),
        contract.max_render_count,
        is_positive_integer_budget,
        "must be a positive integer",
    );
    check(
        errors,
        &field("maxMemoryDelta"),
        contract.max_memory_delta,
        is_positive,
        "must be greater than 0",
    );
    check(
        errors,
        &field("warningThreshold"),
        contract.warning_threshold,
        is_fraction,
        "must be between 0 and 1",
    );
    for (kind, budget) in &contract.interactions {
        if kind.parse::<InteractionKind>().is_err() {
            errors.push(format!(
                "{} is not a supported interaction kind",
                field(&format!("interactions.{kind}"))
            ));
        }
        check(
            errors,
            &field(&format!("interactions.{kind}.maxRenders")),
            budget.max_renders,
            is_positive,
            "must be greater than 0",
        );
    }
}

/// Checks one aggregate contract.
fn validate_aggregate(name: &str, aggregate: &AggregateContract, errors: &mut Vec<String>) {
    let field = |key: &str| format!("aggregates.{name}.{key}");
    if aggregate.components.is_empty() {
        errors.push(format!("{} must list at least one component", field("components")));
    }
    check(
        errors,
        &field("maxTotalRenderTime"),
        aggregate.max_total_render_time,
        is_positive,
        "must be greater than 0",
    );
    check(
        errors,
        &field("maxTotalRenderCount"),
        aggregate.max_total_render_count,
        is_positive_integer_budget,
        "must be a positive integer",
    );
}

// ============================================================================
// SECTION: Rules
// ============================================================================

/// Largest run or window count that resolves without saturating.
const MAX_COUNT: f64 = 4_294_967_295.0;
/// Message for counts outside `[1, u32::MAX]`.
const COUNT_MESSAGE: &str = "must be an integer between 1 and 4294967295";

/// Appends `"{field} {message}"` when a present value breaks `rule`.
fn check(
    errors: &mut Vec<String>,
    field: &str,
    value: Option<f64>,
    rule: fn(f64) -> bool,
    message: &str,
) {
    if let Some(value) = value
        && !rule(value)
    {
        errors.push(format!("{field} {message} (got {value})"));
    }
}

/// Finite value without a fractional part.
fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Integer count in `[1, u32::MAX]`.
fn is_positive_count(value: f64) -> bool {
    is_integer(value) && (1.0..=MAX_COUNT).contains(&value)
}

/// Integer count in `[0, u32::MAX]`.
fn is_non_negative_count(value: f64) -> bool {
    is_integer(value) && (0.0..=MAX_COUNT).contains(&value)
}

/// Positive integer, or `+inf` for an explicitly unbounded budget.
fn is_positive_integer_budget(value: f64) -> bool {
    value == f64::INFINITY || (is_integer(value) && value >= 1.0)
}

/// Greater than zero; `+inf` is allowed and NaN is not.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Within `[0, 1]`.
fn is_fraction(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn rules_reject_nan() {
        assert!(!is_positive(f64::NAN));
        assert!(!is_fraction(f64::NAN));
        assert!(!is_positive_count(f64::NAN));
        assert!(!is_non_negative_count(f64::NAN));
        assert!(!is_positive_integer_budget(f64::NAN));
    }

    #[test]
    fn integer_rules_reject_fractions() {
        assert!(is_positive_count(3.0));
        assert!(!is_positive_count(2.5));
        assert!(!is_positive_count(0.0));
        assert!(is_non_negative_count(0.0));
        assert!(!is_non_negative_count(-1.0));
        assert!(is_positive_integer_budget(f64::INFINITY));
        assert!(is_positive_integer_budget(1e12));
        assert!(!is_positive_count(f64::INFINITY));
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "The bound is an exact integer.")]
    fn count_rules_stop_at_u32_max() {
        assert_eq!(MAX_COUNT, f64::from(u32::MAX));
        assert!(is_positive_count(MAX_COUNT));
        assert!(is_non_negative_count(MAX_COUNT));
        assert!(!is_positive_count(MAX_COUNT + 1.0));
        assert!(!is_non_negative_count(5e9));
        assert!(!is_positive_count(1e12));
    }

    #[test]
    fn display_joins_every_message() {
        let error = ConfigValidationError::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(error.to_string(), "invalid contract config: a; b");
    }
}
