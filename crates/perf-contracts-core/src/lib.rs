// crates/perf-contracts-core/src/lib.rs
// ============================================================================
// Module: Perf Contracts Core Library
// Description: Public API surface for the Perf Contracts core.
// Purpose: Expose core types, interfaces, telemetry, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime, telemetry}
// ============================================================================

//! ## Overview
//! Perf Contracts core turns per-commit render observations into
//! per-component and per-interaction statistics, merges repeated runs, and
//! validates the result against declared performance budgets. It never
//! renders UI or simulates input itself; hosts integrate through the
//! [`interfaces`] traits.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::ComponentHarness;
pub use interfaces::DriverError;
pub use interfaces::DriverEvent;
pub use interfaces::HarnessError;
pub use interfaces::InteractionDriver;
pub use runtime::AggregationError;
pub use runtime::MeasureRequest;
pub use runtime::MeasurementRunner;
pub use runtime::RenderRecorder;
pub use runtime::RenderSnapshot;
pub use runtime::RunError;
pub use runtime::RunPlan;
pub use runtime::TrackerError;
pub use runtime::aggregate_measurements;
pub use runtime::count_by_status;
pub use runtime::overall_status;
pub use runtime::validate_against_contract;
pub use runtime::validate_aggregate;
pub use telemetry::FileRunEventSink;
pub use telemetry::NoopRunEventSink;
pub use telemetry::RunEvent;
pub use telemetry::RunEventKind;
pub use telemetry::RunEventSink;
pub use telemetry::StderrRunEventSink;
