// crates/perf-contracts-core/src/runtime/runner.rs
// ============================================================================
// Module: Measurement Runner
// Description: Warmup and measured runs executed strictly in sequence.
// Purpose: Drive mount, interaction script, and teardown for each run.
// Dependencies: crate::{core, interfaces, runtime, telemetry}, thiserror
// ============================================================================

//! ## Overview
//! A run mounts a fresh component instance into a new [`RenderRecorder`],
//! performs the whole interaction script through the tracker, and unmounts.
//! Warmup runs follow the same protocol and are discarded. Measured runs are
//! merged by the run aggregator. Any failure aborts the whole measurement;
//! no partially filled result is ever returned.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::interaction::InteractionResult;
use crate::core::interaction::InteractionSpec;
use crate::core::measurement::MeasurementResult;
use crate::core::time::Timestamp;
use crate::interfaces::ComponentHarness;
use crate::interfaces::HarnessError;
use crate::runtime::aggregator::AggregationError;
use crate::runtime::aggregator::aggregate_measurements;
use crate::runtime::recorder::RenderRecorder;
use crate::runtime::tracker::TrackerError;
use crate::runtime::tracker::track_interaction;
use crate::telemetry::RunEvent;
use crate::telemetry::RunEventKind;
use crate::telemetry::RunEventSink;

// ============================================================================
// SECTION: Request Types
// ============================================================================

/// Number of warmup and measured runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPlan {
    /// Measured runs; must be at least one.
    pub runs: u32,
    /// Discarded runs executed before measuring.
    pub warmup_runs: u32,
}

/// Measurement request for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureRequest {
    /// Component under measurement.
    pub component_name: String,
    /// Interaction script, identical for every run.
    pub script: Vec<InteractionSpec>,
    /// Run counts.
    pub plan: RunPlan,
    /// Host-supplied timestamp stamped onto results and events.
    pub timestamp: Timestamp,
}

/// Measurement errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Plan requested zero measured runs.
    #[error("run plan requires at least one measured run")]
    InvalidRunPlan,
    /// Component mount failed.
    #[error(transparent)]
    Mount(#[from] HarnessError),
    /// An interaction failed.
    #[error(transparent)]
    Interaction(#[from] TrackerError),
    /// Measured runs could not be merged.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Executes measurement runs sequentially and reports lifecycle events.
pub struct MeasurementRunner<S> {
    /// Lifecycle event sink.
    sink: S,
}

impl<S> MeasurementRunner<S>
where
    S: RunEventSink,
{
    /// Creates a runner reporting to `sink`.
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
        }
    }

    /// Returns the lifecycle event sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs warmups, then measured runs, and aggregates the measured runs.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] when the plan is empty or any run fails.
    pub async fn measure<H>(
        &self,
        harness: &mut H,
        request: &MeasureRequest,
    ) -> Result<MeasurementResult, RunError>
    where
        H: ComponentHarness + ?Sized,
    {
        if request.plan.runs == 0 {
            return Err(RunError::InvalidRunPlan);
        }
        for run_index in 0..request.plan.warmup_runs {
            self.run_once(harness, request, run_index, true).await?;
        }
        let mut measured = Vec::new();
        for run_index in 0..request.plan.runs {
            measured.push(self.run_once(harness, request, run_index, false).await?);
        }

        let run_count = measured.len();
        let aggregated = aggregate_measurements(measured)?;
        let mut event = base_event(RunEventKind::AggregationCompleted, request);
        event.run_index = Some(run_count);
        event.render_count = Some(aggregated.metrics.render_count);
        event.interactions = Some(aggregated.interaction_results.len());
        self.sink.record(&event);
        Ok(aggregated)
    }

    /// Executes one mount-through-unmount run.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] when mounting or any interaction fails.
    pub async fn run_once<H>(
        &self,
        harness: &mut H,
        request: &MeasureRequest,
        run_index: u32,
        warmup: bool,
    ) -> Result<MeasurementResult, RunError>
    where
        H: ComponentHarness + ?Sized,
    {
        let mut recorder = RenderRecorder::new(request.component_name.clone());
        let outcome = self.perform(harness, &mut recorder, request, run_index, warmup).await;
        harness.unmount();

        let mut event = base_event(RunEventKind::RunCompleted, request);
        event.run_index = usize::try_from(run_index).ok();
        event.warmup = warmup;
        event.render_count = Some(recorder.snapshot().render_count);
        match outcome {
            Ok(interaction_results) => {
                event.interactions = Some(interaction_results.len());
                self.sink.record(&event);
                let memory_delta = harness.memory_delta();
                Ok(MeasurementResult::new(recorder.finish(), interaction_results, request.timestamp)
                    .with_memory_delta(memory_delta))
            }
            Err(error) => {
                event.event = RunEventKind::RunFailed;
                event.error = Some(error.to_string());
                self.sink.record(&event);
                Err(error)
            }
        }
    }

    /// Mounts the component and performs the script against `recorder`.
    async fn perform<H>(
        &self,
        harness: &mut H,
        recorder: &mut RenderRecorder,
        request: &MeasureRequest,
        run_index: u32,
        warmup: bool,
    ) -> Result<Vec<InteractionResult>, RunError>
    where
        H: ComponentHarness + ?Sized,
    {
        harness.mount(recorder)?;
        let mut event = base_event(RunEventKind::RunStarted, request);
        event.run_index = usize::try_from(run_index).ok();
        event.warmup = warmup;
        event.render_count = Some(recorder.snapshot().render_count);
        self.sink.record(&event);

        let mut results = Vec::with_capacity(request.script.len());
        for (index, spec) in request.script.iter().enumerate() {
            let result = track_interaction(harness, recorder, spec).await?;
            let mut event = base_event(RunEventKind::InteractionMeasured, request);
            event.run_index = usize::try_from(run_index).ok();
            event.warmup = warmup;
            event.render_count = Some(result.renders_triggered);
            event.interactions = Some(index);
            self.sink.record(&event);
            results.push(result);
        }
        Ok(results)
    }
}

/// Builds a base event for the request.
fn base_event(kind: RunEventKind, request: &MeasureRequest) -> RunEvent {
    RunEvent::new(kind, request.component_name.clone(), request.timestamp)
}
