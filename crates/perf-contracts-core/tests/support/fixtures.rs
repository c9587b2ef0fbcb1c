// crates/perf-contracts-core/tests/support/fixtures.rs
// ============================================================================
// Module: Measurement Fixtures
// Description: Builders for render metrics, interaction results, and contracts.
// ============================================================================
//! ## Overview
//! Fixture builders keep test bodies focused on the behavior under test.

use std::collections::BTreeMap;

use perf_contracts_core::InteractionBudget;
use perf_contracts_core::InteractionKind;
use perf_contracts_core::InteractionResult;
use perf_contracts_core::InteractionSpec;
use perf_contracts_core::MeasurementResult;
use perf_contracts_core::RenderEvent;
use perf_contracts_core::RenderMetrics;
use perf_contracts_core::RenderPhase;
use perf_contracts_core::ResolvedComponentContract;
use perf_contracts_core::Timestamp;

/// Builds one update commit with the given actual duration.
pub fn commit(actual_duration: f64) -> RenderEvent {
    RenderEvent {
        phase: RenderPhase::Update,
        actual_duration,
        base_duration: actual_duration,
        start_time: 0.0,
        commit_time: actual_duration,
    }
}

/// Builds metrics from a list of commit durations.
pub fn metrics(component: &str, durations: &[f64]) -> RenderMetrics {
    RenderMetrics::from_events(component, durations.iter().copied().map(commit))
}

/// Builds an interaction result for a kind against `#target`.
pub fn interaction(kind: InteractionKind, renders: u32, total_time: f64) -> InteractionResult {
    InteractionResult {
        interaction: InteractionSpec::new(kind, "#target"),
        renders_triggered: renders,
        total_render_time: total_time,
        average_render_time: if renders == 0 { 0.0 } else { total_time / f64::from(renders) },
    }
}

/// Builds an interactive measurement stamped with logical time `tick`.
pub fn measurement(
    component: &str,
    durations: &[f64],
    interactions: Vec<InteractionResult>,
    tick: u64,
) -> MeasurementResult {
    MeasurementResult::new(metrics(component, durations), interactions, Timestamp::Logical(tick))
}

/// Builds a contract with only the render-time and render-count budgets set.
pub fn render_contract(max_render_time: f64, max_render_count: f64) -> ResolvedComponentContract {
    ResolvedComponentContract {
        max_render_time,
        max_render_count,
        ..ResolvedComponentContract::default()
    }
}

/// Builds a contract with only interaction budgets set.
pub fn interaction_contract(budgets: &[(&str, f64)]) -> ResolvedComponentContract {
    let interactions: BTreeMap<String, InteractionBudget> = budgets
        .iter()
        .map(|(kind, max_renders)| {
            (
                (*kind).to_string(),
                InteractionBudget {
                    max_renders: *max_renders,
                },
            )
        })
        .collect();
    ResolvedComponentContract {
        interactions,
        ..ResolvedComponentContract::default()
    }
}
