// crates/perf-contracts-core/src/core/contract.rs
// ============================================================================
// Module: Resolved Contracts
// Description: Fully defaulted budgets consumed by the validator.
// Purpose: Give validation a contract shape with no optional fields.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Resolved contracts are produced by the configuration resolver. Every budget
//! is either a positive finite number or [`UNBOUNDED`] (`+infinity`), which
//! means "no check": an unset budget is unbounded, never zero.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Sentinel budget meaning "no limit".
pub const UNBOUNDED: f64 = f64::INFINITY;
/// Default utilization fraction above which a passing metric becomes `warn`.
pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.8;

/// Returns true when a budget should be checked.
#[must_use]
pub const fn is_bounded(budget: f64) -> bool {
    budget.is_finite()
}

// ============================================================================
// SECTION: Component Contract
// ============================================================================

/// Per-kind interaction budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionBudget {
    /// Maximum renders attributed to the kind.
    pub max_renders: f64,
}

/// Component contract with every field populated.
///
/// # Invariants
/// - Numeric budgets are positive finite numbers or [`UNBOUNDED`].
/// - `warning_threshold` lies in `[0, 1]` when produced from a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedComponentContract {
    /// Maximum average render time in milliseconds.
    pub max_render_time: f64,
    /// Maximum number of commits.
    pub max_render_count: f64,
    /// Maximum heap delta in bytes.
    pub max_memory_delta: f64,
    /// Utilization fraction above which a passing metric warns.
    pub warning_threshold: f64,
    /// Interaction budgets keyed by kind label.
    pub interactions: BTreeMap<String, InteractionBudget>,
    /// Free-form metadata carried through for reporting.
    pub meta: BTreeMap<String, Value>,
}

impl Default for ResolvedComponentContract {
    fn default() -> Self {
        Self {
            max_render_time: UNBOUNDED,
            max_render_count: UNBOUNDED,
            max_memory_delta: UNBOUNDED,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            interactions: BTreeMap::new(),
            meta: BTreeMap::new(),
        }
    }
}

impl ResolvedComponentContract {
    /// Returns true when no budget of the contract is bounded.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        !is_bounded(self.max_render_time)
            && !is_bounded(self.max_render_count)
            && !is_bounded(self.max_memory_delta)
            && self.interactions.values().all(|budget| !is_bounded(budget.max_renders))
    }
}

// ============================================================================
// SECTION: Aggregate Contract
// ============================================================================

/// Budget spanning several components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAggregate {
    /// Member component names.
    pub components: Vec<String>,
    /// Maximum summed render time in milliseconds.
    pub max_total_render_time: f64,
    /// Maximum summed commit count.
    pub max_total_render_count: f64,
}
