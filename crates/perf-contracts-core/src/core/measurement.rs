// crates/perf-contracts-core/src/core/measurement.rs
// ============================================================================
// Module: Measurement Results
// Description: Single-run and aggregated measurement records.
// Purpose: Carry component metrics plus per-interaction attribution to validation.
// Dependencies: crate::core::{interaction, render, time}, serde
// ============================================================================

//! ## Overview
//! A [`MeasurementResult`] captures one run (or an aggregate of runs) for a
//! component. [`Measurement`] is the tagged input to validation: callers say
//! explicitly whether they hold plain render metrics or an interaction-aware
//! result, and validation branches on that tag.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::interaction::InteractionKind;
use crate::core::interaction::InteractionResult;
use crate::core::numeric::mean;
use crate::core::render::RenderMetrics;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Measurement Result
// ============================================================================

/// Measurement of one component, single-run or aggregated.
///
/// # Invariants
/// - `total_renders == metrics.render_count`.
/// - `renders_by_type` and `renders_per_interaction` are derived from
///   `interaction_results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResult {
    /// Component under measurement.
    pub component_name: String,
    /// Render metrics covering mount and every interaction.
    pub metrics: RenderMetrics,
    /// Per-interaction deltas in script order.
    pub interaction_results: Vec<InteractionResult>,
    /// Total commits observed.
    pub total_renders: u32,
    /// Mean renders triggered per interaction.
    pub renders_per_interaction: f64,
    /// Renders triggered per interaction kind.
    pub renders_by_type: BTreeMap<InteractionKind, u32>,
    /// Host-supplied capture time.
    pub timestamp: Timestamp,
    /// Heap delta in bytes when the harness reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_delta: Option<f64>,
}

impl MeasurementResult {
    /// Assembles a result, deriving the interaction summaries.
    #[must_use]
    pub fn new(
        metrics: RenderMetrics,
        interaction_results: Vec<InteractionResult>,
        timestamp: Timestamp,
    ) -> Self {
        let renders_by_type = renders_by_type(&interaction_results);
        let renders_per_interaction = renders_per_interaction(&interaction_results);
        Self {
            component_name: metrics.component_name.clone(),
            total_renders: metrics.render_count,
            metrics,
            interaction_results,
            renders_per_interaction,
            renders_by_type,
            timestamp,
            memory_delta: None,
        }
    }

    /// Attaches a harness-reported memory delta.
    #[must_use]
    pub fn with_memory_delta(mut self, memory_delta: Option<f64>) -> Self {
        self.memory_delta = memory_delta;
        self
    }

    /// Returns the renders attributed to a kind, `0` if it never occurred.
    #[must_use]
    pub fn renders_for(&self, kind: InteractionKind) -> u32 {
        self.renders_by_type.get(&kind).copied().unwrap_or(0)
    }
}

/// Sums triggered renders per interaction kind.
#[must_use]
pub fn renders_by_type(results: &[InteractionResult]) -> BTreeMap<InteractionKind, u32> {
    let mut out = BTreeMap::new();
    for result in results {
        let entry = out.entry(result.interaction.kind).or_insert(0_u32);
        *entry = entry.saturating_add(result.renders_triggered);
    }
    out
}

/// Mean triggered renders per interaction; `0` without interactions.
#[must_use]
pub fn renders_per_interaction(results: &[InteractionResult]) -> f64 {
    mean(results.iter().map(|result| f64::from(result.renders_triggered)))
}

// ============================================================================
// SECTION: Validation Input
// ============================================================================

/// Tagged validation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Measurement {
    /// Render metrics without interaction attribution.
    Metrics(RenderMetrics),
    /// Interaction-aware measurement (single run or aggregate).
    Interactive(MeasurementResult),
}

impl Measurement {
    /// Returns the render metrics regardless of variant.
    #[must_use]
    pub const fn metrics(&self) -> &RenderMetrics {
        match self {
            Self::Metrics(metrics) => metrics,
            Self::Interactive(result) => &result.metrics,
        }
    }

    /// Returns the interaction-aware result when present.
    #[must_use]
    pub const fn interactive(&self) -> Option<&MeasurementResult> {
        match self {
            Self::Metrics(_) => None,
            Self::Interactive(result) => Some(result),
        }
    }
}

impl From<RenderMetrics> for Measurement {
    fn from(metrics: RenderMetrics) -> Self {
        Self::Metrics(metrics)
    }
}

impl From<MeasurementResult> for Measurement {
    fn from(result: MeasurementResult) -> Self {
        Self::Interactive(result)
    }
}
