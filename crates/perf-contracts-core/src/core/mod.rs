// crates/perf-contracts-core/src/core/mod.rs
// ============================================================================
// Module: Perf Contracts Core Types
// Description: Canonical render, measurement, contract, and verdict records.
// Purpose: Provide stable, serializable types shared by runtime and config layers.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types describe what was observed (render events and metrics), what was
//! performed (interaction specs and results), what was promised (resolved
//! contracts), and what was concluded (validation results). Report and CI
//! layers consume these types directly.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod contract;
pub mod interaction;
pub mod measurement;
pub mod numeric;
pub mod render;
pub mod status;
pub mod time;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use contract::DEFAULT_WARNING_THRESHOLD;
pub use contract::InteractionBudget;
pub use contract::ResolvedAggregate;
pub use contract::ResolvedComponentContract;
pub use contract::UNBOUNDED;
pub use contract::is_bounded;
pub use interaction::InteractionKind;
pub use interaction::InteractionResult;
pub use interaction::InteractionSpec;
pub use interaction::RawInteractionSpec;
pub use interaction::UnsupportedInteractionKind;
pub use measurement::Measurement;
pub use measurement::MeasurementResult;
pub use render::RenderEvent;
pub use render::RenderMetrics;
pub use render::RenderPhase;
pub use status::ContractStatus;
pub use status::Severity;
pub use status::StatusCounts;
pub use time::Timestamp;
pub use validation::FixSuggestion;
pub use validation::MetricValidation;
pub use validation::ValidationResult;
pub use validation::Violation;
