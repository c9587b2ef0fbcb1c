// crates/perf-contracts-core/src/runtime/summary.rs
// ============================================================================
// Module: Report Summary
// Description: Report-level status folding and multi-component budgets.
// Purpose: Gate CI on many validation results at once.
// Dependencies: crate::{core, runtime::validator}
// ============================================================================

//! ## Overview
//! Report-level helpers are pure folds over validation results. Aggregate
//! budgets sum member measurements and reuse the per-metric rules of the
//! component validator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::contract::DEFAULT_WARNING_THRESHOLD;
use crate::core::contract::ResolvedAggregate;
use crate::core::measurement::MeasurementResult;
use crate::core::status::ContractStatus;
use crate::core::status::StatusCounts;
use crate::core::validation::METRIC_TOTAL_RENDER_COUNT;
use crate::core::validation::METRIC_TOTAL_RENDER_TIME;
use crate::core::validation::ValidationResult;
use crate::runtime::validator::MetricChecks;

// ============================================================================
// SECTION: Status Folding
// ============================================================================

/// Returns the most severe status across results; `pass` for an empty list.
#[must_use]
pub fn overall_status(results: &[ValidationResult]) -> ContractStatus {
    ContractStatus::combine(results.iter().map(|result| result.status))
}

/// Tallies results by status.
#[must_use]
pub fn count_by_status(results: &[ValidationResult]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for result in results {
        counts.record(result.status);
    }
    counts
}

// ============================================================================
// SECTION: Aggregate Budgets
// ============================================================================

/// Validates summed render time and count for an aggregate of components.
///
/// Members without a measurement contribute nothing to the sums.
#[must_use]
pub fn validate_aggregate(
    aggregate_name: &str,
    aggregate: &ResolvedAggregate,
    measurements: &BTreeMap<String, MeasurementResult>,
) -> ValidationResult {
    let members = || aggregate.components.iter().filter_map(|name| measurements.get(name));
    let total_time: f64 = members().map(|result| result.metrics.total_actual_duration).sum();
    let total_count: f64 = members().map(|result| f64::from(result.metrics.render_count)).sum();

    let mut checks = MetricChecks::new(DEFAULT_WARNING_THRESHOLD);
    checks.check(METRIC_TOTAL_RENDER_TIME, total_time, aggregate.max_total_render_time);
    checks.check(METRIC_TOTAL_RENDER_COUNT, total_count, aggregate.max_total_render_count);
    checks.finish(aggregate_name)
}
