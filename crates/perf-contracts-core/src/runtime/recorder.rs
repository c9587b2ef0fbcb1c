// crates/perf-contracts-core/src/runtime/recorder.rs
// ============================================================================
// Module: Render Recorder
// Description: Per-run render accumulator fed by the instrumentation callback.
// Purpose: Own the run's render counters and expose read-only snapshots.
// Dependencies: crate::core::render
// ============================================================================

//! ## Overview
//! One [`RenderRecorder`] exists per run. It is created before mount, lent by
//! exclusive borrow to the harness, driver, and tracker of that run only, and
//! consumed into immutable [`RenderMetrics`] when the run ends. Counters only
//! ever grow while the run is in progress.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::render::RenderEvent;
use crate::core::render::RenderMetrics;
use crate::core::render::RenderPhase;

// ============================================================================
// SECTION: Snapshot
// ============================================================================

/// Point-in-time view of a recorder's counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    /// Commits recorded so far.
    pub render_count: u32,
    /// Actual render time recorded so far, in milliseconds.
    pub render_time: f64,
}

impl RenderSnapshot {
    /// Returns the commits recorded since `before`.
    #[must_use]
    pub const fn renders_since(&self, before: &Self) -> u32 {
        self.render_count.saturating_sub(before.render_count)
    }

    /// Returns the render time recorded since `before`.
    #[must_use]
    pub fn time_since(&self, before: &Self) -> f64 {
        (self.render_time - before.render_time).max(0.0)
    }
}

// ============================================================================
// SECTION: Recorder
// ============================================================================

/// Exclusively owned render accumulator for one run.
#[derive(Debug, Clone)]
pub struct RenderRecorder {
    /// Metrics accumulated for the current run.
    metrics: RenderMetrics,
}

impl RenderRecorder {
    /// Creates an empty recorder for a component.
    #[must_use]
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            metrics: RenderMetrics::new(component_name),
        }
    }

    /// Records one commit event.
    pub fn record(&mut self, event: RenderEvent) {
        self.metrics.record(event);
    }

    /// Records one commit in the instrumentation callback's argument shape.
    pub fn on_commit(
        &mut self,
        phase: RenderPhase,
        actual_duration: f64,
        base_duration: f64,
        start_time: f64,
        commit_time: f64,
    ) {
        self.record(RenderEvent {
            phase,
            actual_duration,
            base_duration,
            start_time,
            commit_time,
        });
    }

    /// Returns the current counters.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            render_count: self.metrics.render_count,
            render_time: self.metrics.total_actual_duration,
        }
    }

    /// Returns the metrics accumulated so far.
    #[must_use]
    pub const fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Ends the run and returns the final metrics.
    #[must_use]
    pub fn finish(self) -> RenderMetrics {
        self.metrics
    }
}
