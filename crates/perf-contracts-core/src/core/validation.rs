// crates/perf-contracts-core/src/core/validation.rs
// ============================================================================
// Module: Validation Records
// Description: Per-metric checks, violations, and component verdicts.
// Purpose: Provide the structured output consumed by report and CI layers.
// Dependencies: crate::core::status, serde
// ============================================================================

//! ## Overview
//! A [`ValidationResult`] is produced once per validation call and is never
//! mutated afterwards except to attach externally computed fix suggestions.
//! Only bounded metrics appear in [`ValidationResult::metrics`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::status::ContractStatus;
use crate::core::status::Severity;

// ============================================================================
// SECTION: Metric Names
// ============================================================================

/// Metric name for average render time.
pub const METRIC_RENDER_TIME: &str = "renderTime";
/// Metric name for render count.
pub const METRIC_RENDER_COUNT: &str = "renderCount";
/// Metric name for heap delta.
pub const METRIC_MEMORY_DELTA: &str = "memoryDelta";
/// Metric name prefix for per-interaction render counts.
pub const METRIC_INTERACTION_PREFIX: &str = "rendersPerInteraction";
/// Metric name for summed render time across an aggregate.
pub const METRIC_TOTAL_RENDER_TIME: &str = "totalRenderTime";
/// Metric name for summed render count across an aggregate.
pub const METRIC_TOTAL_RENDER_COUNT: &str = "totalRenderCount";

/// Returns the metric name for an interaction kind label.
#[must_use]
pub fn interaction_metric_name(kind: &str) -> String {
    format!("{METRIC_INTERACTION_PREFIX}.{kind}")
}

// ============================================================================
// SECTION: Metric Validation
// ============================================================================

/// Outcome of checking one metric against its budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValidation {
    /// Measured value.
    pub actual: f64,
    /// Finite budget.
    pub budget: f64,
    /// `actual / budget`, or `0` when the budget is zero.
    pub utilization: f64,
    /// Metric verdict.
    pub status: ContractStatus,
    /// Overage fraction for failing metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceeded_by: Option<f64>,
}

/// Recorded failing metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Metric name.
    pub metric: String,
    /// Finite budget.
    pub budget: f64,
    /// Measured value.
    pub actual: f64,
    /// `(actual - budget) / budget`.
    pub exceeded_by_percent: f64,
    /// Overage tier.
    pub severity: Severity,
}

/// Fix hint attached by an external diagnostics collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixSuggestion {
    /// Suggestion category label.
    pub category: String,
    /// Human-readable explanation.
    pub message: String,
    /// Optional source location hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ============================================================================
// SECTION: Validation Result
// ============================================================================

/// Verdict for one component or aggregate.
///
/// # Invariants
/// - `violations` lists exactly the `fail` entries of `metrics`, in check order.
/// - `status` is the most severe status in `metrics`, or `pass` when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Overall verdict.
    pub status: ContractStatus,
    /// Validated component or aggregate name.
    pub component_name: String,
    /// Checked metrics keyed by metric name.
    pub metrics: BTreeMap<String, MetricValidation>,
    /// Failing metrics with severity.
    pub violations: Vec<Violation>,
    /// Externally supplied fix suggestions.
    pub suggestions: Vec<FixSuggestion>,
}

impl ValidationResult {
    /// Returns a copy with suggestions appended.
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: impl IntoIterator<Item = FixSuggestion>) -> Self {
        self.suggestions.extend(suggestions);
        self
    }
}
