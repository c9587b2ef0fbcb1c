// crates/perf-contracts-config/src/lib.rs
// ============================================================================
// Module: Perf Contracts Config Library
// Description: Contract file model, validation, and resolution.
// Purpose: Single source of truth for contract file semantics.
// Dependencies: perf-contracts-core, serde, serde_json, toml
// ============================================================================

//! ## Overview
//! `perf-contracts-config` loads sparse contract files, validates them
//! exhaustively, and resolves them into the fully specified budgets the
//! core validator consumes. Configuration is held in an explicit
//! [`ConfigContext`] rather than process-wide state.
//!
//! Security posture: config inputs are untrusted; loading fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod context;
pub mod examples;
pub mod resolve;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use context::ConfigContext;
pub use examples::config_toml_example;
pub use resolve::*;
pub use validate::ConfigValidationError;
pub use validate::validate_config;
