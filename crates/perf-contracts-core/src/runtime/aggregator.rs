// crates/perf-contracts-core/src/runtime/aggregator.rs
// ============================================================================
// Module: Run Aggregator
// Description: Merges independent measurement runs into one stable result.
// Purpose: Reduce run-to-run noise before budgets are enforced.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Aggregation reports central tendency across runs of the same component and
//! interaction script:
//! - counts are rounded means, durations are plain means;
//! - averages are derived from the means, never averaged directly;
//! - interaction results are merged by script index;
//! - render events are concatenated for diagnostics only.
//!
//! A single run is returned unchanged. Runs whose component or script differ
//! are rejected rather than truncated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::interaction::InteractionResult;
use crate::core::measurement::MeasurementResult;
use crate::core::numeric::mean;
use crate::core::numeric::round_count;
use crate::core::numeric::safe_ratio;
use crate::core::render::RenderMetrics;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Aggregation errors. All indicate caller misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// No runs were supplied.
    #[error("cannot aggregate zero measurement runs")]
    EmptyAggregationInput,
    /// A run measured a different component than the first run.
    #[error("run {run_index} measured component {found}, expected {expected}")]
    ComponentMismatch {
        /// Zero-based index of the offending run.
        run_index: usize,
        /// Component of the first run.
        expected: String,
        /// Component of the offending run.
        found: String,
    },
    /// A run executed a different interaction script than the first run.
    #[error("run {run_index} interaction script differs from run 0: {detail}")]
    InteractionScriptMismatch {
        /// Zero-based index of the offending run.
        run_index: usize,
        /// Description of the first difference.
        detail: String,
    },
}

// ============================================================================
// SECTION: Aggregation
// ============================================================================

/// Merges `runs` into one measurement result.
///
/// # Errors
///
/// Returns [`AggregationError::EmptyAggregationInput`] for an empty input and
/// a mismatch error when runs disagree on component or interaction script.
pub fn aggregate_measurements(
    runs: Vec<MeasurementResult>,
) -> Result<MeasurementResult, AggregationError> {
    let Some(first) = runs.first() else {
        return Err(AggregationError::EmptyAggregationInput);
    };
    check_alignment(first, &runs)?;
    if runs.len() == 1 {
        return runs.into_iter().next().ok_or(AggregationError::EmptyAggregationInput);
    }

    let metrics = aggregate_metrics(&runs);
    let interaction_results = aggregate_interactions(&runs);
    let timestamp = runs.iter().map(|run| run.timestamp).max().unwrap_or(first.timestamp);
    let memory_samples: Vec<f64> = runs.iter().filter_map(|run| run.memory_delta).collect();
    let memory_delta = (!memory_samples.is_empty()).then(|| mean(memory_samples));

    Ok(MeasurementResult::new(metrics, interaction_results, timestamp)
        .with_memory_delta(memory_delta))
}

/// Verifies every run shares the first run's component and script.
fn check_alignment(
    first: &MeasurementResult,
    runs: &[MeasurementResult],
) -> Result<(), AggregationError> {
    for (run_index, run) in runs.iter().enumerate().skip(1) {
        if run.component_name != first.component_name {
            return Err(AggregationError::ComponentMismatch {
                run_index,
                expected: first.component_name.clone(),
                found: run.component_name.clone(),
            });
        }
        if run.interaction_results.len() != first.interaction_results.len() {
            return Err(AggregationError::InteractionScriptMismatch {
                run_index,
                detail: format!(
                    "expected {} interactions, found {}",
                    first.interaction_results.len(),
                    run.interaction_results.len()
                ),
            });
        }
        let mismatch = first
            .interaction_results
            .iter()
            .zip(&run.interaction_results)
            .position(|(expected, found)| expected.interaction != found.interaction);
        if let Some(position) = mismatch {
            return Err(AggregationError::InteractionScriptMismatch {
                run_index,
                detail: format!("interaction {position} differs"),
            });
        }
    }
    Ok(())
}

/// Averages component-level render metrics across runs.
fn aggregate_metrics(runs: &[MeasurementResult]) -> RenderMetrics {
    let mean_count = mean(runs.iter().map(|run| f64::from(run.metrics.render_count)));
    let mean_actual = mean(runs.iter().map(|run| run.metrics.total_actual_duration));
    let mean_base = mean(runs.iter().map(|run| run.metrics.total_base_duration));
    RenderMetrics {
        component_name: runs.first().map(|run| run.component_name.clone()).unwrap_or_default(),
        render_count: round_count(mean_count),
        total_actual_duration: mean_actual,
        total_base_duration: mean_base,
        average_render_time: safe_ratio(mean_actual, mean_count),
        renders: runs.iter().flat_map(|run| run.metrics.renders.iter().copied()).collect(),
    }
}

/// Averages interaction results index by index.
fn aggregate_interactions(runs: &[MeasurementResult]) -> Vec<InteractionResult> {
    let Some(first) = runs.first() else {
        return Vec::new();
    };
    first
        .interaction_results
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let aligned = || runs.iter().filter_map(|run| run.interaction_results.get(index));
            let mean_renders = mean(aligned().map(|result| f64::from(result.renders_triggered)));
            let mean_time = mean(aligned().map(|result| result.total_render_time));
            InteractionResult {
                interaction: template.interaction.clone(),
                renders_triggered: round_count(mean_renders),
                total_render_time: mean_time,
                average_render_time: safe_ratio(mean_time, mean_renders),
            }
        })
        .collect()
}
