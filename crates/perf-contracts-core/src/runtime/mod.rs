// crates/perf-contracts-core/src/runtime/mod.rs
// ============================================================================
// Module: Perf Contracts Runtime
// Description: Measurement runs, aggregation, and contract validation.
// Purpose: Turn render observations into verdicts that gate CI.
// Dependencies: crate::{core, interfaces, telemetry}
// ============================================================================

//! ## Overview
//! Runtime modules implement the measurement pipeline leaves first:
//! [`recorder`] accumulates commits for one run, [`tracker`] attributes
//! deltas to interactions, [`runner`] sequences warmup and measured runs,
//! [`aggregator`] merges runs, [`validator`] checks budgets, and [`summary`]
//! folds many verdicts into one.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod aggregator;
pub mod recorder;
pub mod runner;
pub mod summary;
pub mod tracker;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use aggregator::AggregationError;
pub use aggregator::aggregate_measurements;
pub use recorder::RenderRecorder;
pub use recorder::RenderSnapshot;
pub use runner::MeasureRequest;
pub use runner::MeasurementRunner;
pub use runner::RunError;
pub use runner::RunPlan;
pub use summary::count_by_status;
pub use summary::overall_status;
pub use summary::validate_aggregate;
pub use tracker::TrackerError;
pub use tracker::driver_events;
pub use tracker::parse_script;
pub use tracker::track_interaction;
pub use tracker::track_interactions;
pub use validator::check_metric;
pub use validator::classify;
pub use validator::utilization;
pub use validator::validate_against_contract;
