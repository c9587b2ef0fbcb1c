// crates/perf-contracts-core/src/core/time.rs
// ============================================================================
// Module: Perf Contracts Time Model
// Description: Canonical timestamp representation for measurement records.
// Purpose: Keep measurement records replayable without wall-clock reads.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Measurement results carry a host-supplied timestamp. The core never reads
//! wall-clock time itself, so validation stays a pure function of its inputs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Timestamp attached to a measurement result.
///
/// # Invariants
/// - Values are explicitly provided by callers; the core never reads wall-clock time.
/// - Ordering compares unix and logical values separately; mixing kinds is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Timestamp {
    /// Unix epoch milliseconds.
    UnixMillis(i64),
    /// Monotonic logical time value.
    Logical(u64),
}
