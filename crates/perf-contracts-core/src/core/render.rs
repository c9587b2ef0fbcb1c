// crates/perf-contracts-core/src/core/render.rs
// ============================================================================
// Module: Render Observations
// Description: Commit-level render events and per-component render metrics.
// Purpose: Accumulate raw instrumentation callbacks into component statistics.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The instrumentation collaborator reports one [`RenderEvent`] per commit of
//! an observed subtree. [`RenderMetrics`] folds those events incrementally
//! while a run is in progress; once the run ends its value is treated as
//! immutable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::numeric::safe_ratio;

// ============================================================================
// SECTION: Render Events
// ============================================================================

/// Commit phase reported by the instrumentation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderPhase {
    /// First commit of the subtree.
    Mount,
    /// Re-render caused by a state or prop change.
    Update,
    /// Re-render scheduled from inside a commit phase.
    NestedUpdate,
}

/// Single commit observation. All durations and timestamps are milliseconds.
///
/// # Invariants
/// - Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEvent {
    /// Commit phase.
    pub phase: RenderPhase,
    /// Time spent rendering the committed update.
    pub actual_duration: f64,
    /// Estimated time to render the whole subtree without memoization.
    pub base_duration: f64,
    /// When rendering of this update began.
    pub start_time: f64,
    /// When the update was committed.
    pub commit_time: f64,
}

// ============================================================================
// SECTION: Render Metrics
// ============================================================================

/// Aggregate render statistics for one component.
///
/// # Invariants
/// - `average_render_time == total_actual_duration / render_count`, or `0`
///   when `render_count == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderMetrics {
    /// Component under measurement.
    pub component_name: String,
    /// Number of commits observed.
    pub render_count: u32,
    /// Sum of actual durations.
    pub total_actual_duration: f64,
    /// Sum of base durations.
    pub total_base_duration: f64,
    /// Mean actual duration per commit.
    pub average_render_time: f64,
    /// Observed events in commit order.
    pub renders: Vec<RenderEvent>,
}

impl RenderMetrics {
    /// Creates empty metrics for a component.
    #[must_use]
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            render_count: 0,
            total_actual_duration: 0.0,
            total_base_duration: 0.0,
            average_render_time: 0.0,
            renders: Vec::new(),
        }
    }

    /// Builds metrics by folding a sequence of events.
    #[must_use]
    pub fn from_events<I>(component_name: impl Into<String>, events: I) -> Self
    where
        I: IntoIterator<Item = RenderEvent>,
    {
        let mut metrics = Self::new(component_name);
        for event in events {
            metrics.record(event);
        }
        metrics
    }

    /// Folds one commit event into the running totals.
    pub fn record(&mut self, event: RenderEvent) {
        self.render_count = self.render_count.saturating_add(1);
        self.total_actual_duration += event.actual_duration;
        self.total_base_duration += event.base_duration;
        self.average_render_time =
            safe_ratio(self.total_actual_duration, f64::from(self.render_count));
        self.renders.push(event);
    }
}
