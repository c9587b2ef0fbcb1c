// crates/perf-contracts-core/src/runtime/validator.rs
// ============================================================================
// Module: Contract Validator
// Description: Budget checks producing tri-state verdicts and violations.
// Purpose: Compare a measurement against a resolved contract deterministically.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Validation is a pure function of `(measurement, contract)`. Each bounded
//! budget yields one [`MetricValidation`]; unbounded budgets are skipped
//! entirely. A metric fails when utilization exceeds `1`, warns when it
//! exceeds the contract's warning threshold, and passes otherwise. Only
//! failing metrics produce a [`Violation`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::contract::ResolvedComponentContract;
use crate::core::contract::is_bounded;
use crate::core::interaction::InteractionKind;
use crate::core::measurement::Measurement;
use crate::core::numeric::safe_ratio;
use crate::core::status::ContractStatus;
use crate::core::status::Severity;
use crate::core::validation::METRIC_MEMORY_DELTA;
use crate::core::validation::METRIC_RENDER_COUNT;
use crate::core::validation::METRIC_RENDER_TIME;
use crate::core::validation::MetricValidation;
use crate::core::validation::ValidationResult;
use crate::core::validation::Violation;
use crate::core::validation::interaction_metric_name;

// ============================================================================
// SECTION: Metric Classification
// ============================================================================

/// Returns `actual / budget`, or `0` when the budget is zero.
#[must_use]
pub const fn utilization(actual: f64, budget: f64) -> f64 {
    safe_ratio(actual, budget)
}

/// Classifies a utilization against a warning threshold.
#[must_use]
pub const fn classify(utilization: f64, warning_threshold: f64) -> ContractStatus {
    if utilization > 1.0 {
        ContractStatus::Fail
    } else if utilization > warning_threshold {
        ContractStatus::Warn
    } else {
        ContractStatus::Pass
    }
}

/// Checks one metric; `None` when the budget is unbounded.
#[must_use]
pub fn check_metric(actual: f64, budget: f64, warning_threshold: f64) -> Option<MetricValidation> {
    if !is_bounded(budget) {
        return None;
    }
    let utilization = utilization(actual, budget);
    let status = classify(utilization, warning_threshold);
    let exceeded_by = status.is_fail().then(|| safe_ratio(actual - budget, budget));
    Some(MetricValidation {
        actual,
        budget,
        utilization,
        status,
        exceeded_by,
    })
}

// ============================================================================
// SECTION: Metric Checks
// ============================================================================

/// Accumulates metric checks into a validation result.
#[derive(Debug)]
pub(crate) struct MetricChecks {
    /// Threshold applied to every check.
    warning_threshold: f64,
    /// Checked metrics keyed by name.
    metrics: BTreeMap<String, MetricValidation>,
    /// Violations in check order.
    violations: Vec<Violation>,
}

impl MetricChecks {
    /// Starts an empty set of checks.
    pub(crate) const fn new(warning_threshold: f64) -> Self {
        Self {
            warning_threshold,
            metrics: BTreeMap::new(),
            violations: Vec::new(),
        }
    }

    /// Checks one metric and records the outcome when the budget is bounded.
    pub(crate) fn check(&mut self, name: impl Into<String>, actual: f64, budget: f64) {
        let Some(validation) = check_metric(actual, budget, self.warning_threshold) else {
            return;
        };
        let name = name.into();
        if let Some(exceeded_by_percent) = validation.exceeded_by {
            self.violations.push(Violation {
                metric: name.clone(),
                budget,
                actual,
                exceeded_by_percent,
                severity: Severity::from_overage(exceeded_by_percent),
            });
        }
        self.metrics.insert(name, validation);
    }

    /// Finalizes the checks into a result for `component_name`.
    pub(crate) fn finish(self, component_name: &str) -> ValidationResult {
        ValidationResult {
            status: ContractStatus::combine(self.metrics.values().map(|metric| metric.status)),
            component_name: component_name.to_string(),
            metrics: self.metrics,
            violations: self.violations,
            suggestions: Vec::new(),
        }
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a measurement against a resolved component contract.
///
/// Interaction budgets apply only to [`Measurement::Interactive`] inputs; a
/// declared kind that never occurred counts as `0` renders.
#[must_use]
pub fn validate_against_contract(
    component_name: &str,
    measurement: &Measurement,
    contract: &ResolvedComponentContract,
) -> ValidationResult {
    let metrics = measurement.metrics();
    let mut checks = MetricChecks::new(contract.warning_threshold);

    checks.check(METRIC_RENDER_TIME, metrics.average_render_time, contract.max_render_time);
    checks.check(METRIC_RENDER_COUNT, f64::from(metrics.render_count), contract.max_render_count);

    if let Some(result) = measurement.interactive() {
        if let Some(memory_delta) = result.memory_delta {
            checks.check(METRIC_MEMORY_DELTA, memory_delta, contract.max_memory_delta);
        }
        for (kind, budget) in &contract.interactions {
            let actual = kind.parse::<InteractionKind>().map_or(0, |kind| result.renders_for(kind));
            checks.check(interaction_metric_name(kind), f64::from(actual), budget.max_renders);
        }
    }

    checks.finish(component_name)
}
