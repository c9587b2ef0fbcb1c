// crates/perf-contracts-core/src/core/status.rs
// ============================================================================
// Module: Contract Status Logic
// Description: Tri-state verdicts, severity tiers, and precedence folding.
// Purpose: Provide deterministic pass/warn/fail combination for budget checks.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! Defines the closed `pass/warn/fail` verdict set and the precedence rule used
//! everywhere verdicts are combined: the most severe status wins
//! (`fail > warn > pass`). An empty set of verdicts is vacuously `pass`.
//! Severity tiers classify how far a failing metric overshoots its budget.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Lower bound (inclusive) of the moderate severity tier.
pub const MODERATE_OVERAGE: f64 = 0.25;
/// Lower bound (inclusive) of the severe severity tier.
pub const SEVERE_OVERAGE: f64 = 0.5;

// ============================================================================
// SECTION: Contract Status
// ============================================================================

/// Tri-state verdict for a metric, component, or whole report.
///
/// # Invariants
/// - Variant order encodes precedence: `Pass < Warn < Fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Within budget and below the warning threshold.
    Pass,
    /// Within budget but above the warning threshold.
    Warn,
    /// Over budget.
    Fail,
}

impl ContractStatus {
    /// Returns the more severe of two statuses.
    #[must_use]
    pub const fn worst(self, other: Self) -> Self {
        match (self, other) {
            (Self::Fail, _) | (_, Self::Fail) => Self::Fail,
            (Self::Warn, _) | (_, Self::Warn) => Self::Warn,
            _ => Self::Pass,
        }
    }

    /// Folds statuses with the precedence rule; empty input yields `Pass`.
    #[must_use]
    pub fn combine<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        statuses.into_iter().fold(Self::Pass, Self::worst)
    }

    /// Returns a stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }

    /// Returns true if the status is `Fail`.
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Status Counts
// ============================================================================

/// Per-status tallies over a list of verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Number of passing entries.
    pub pass: usize,
    /// Number of warning entries.
    pub warn: usize,
    /// Number of failing entries.
    pub fail: usize,
}

impl StatusCounts {
    /// Adds one entry with the given status.
    pub const fn record(&mut self, status: ContractStatus) {
        match status {
            ContractStatus::Pass => self.pass += 1,
            ContractStatus::Warn => self.warn += 1,
            ContractStatus::Fail => self.fail += 1,
        }
    }

    /// Returns the total number of counted entries.
    #[must_use]
    pub const fn total(self) -> usize {
        self.pass + self.warn + self.fail
    }
}

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Overage severity for a failing metric.
///
/// # Invariants
/// - Tiers are half-open: `[0, 0.25)` minor, `[0.25, 0.5)` moderate,
///   `[0.5, inf)` severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Overage below 25%.
    Minor,
    /// Overage from 25% up to 50%.
    Moderate,
    /// Overage of 50% or more.
    Severe,
}

impl Severity {
    /// Classifies an overage fraction (`(actual - budget) / budget`).
    #[must_use]
    pub fn from_overage(exceeded_by_percent: f64) -> Self {
        if exceeded_by_percent >= SEVERE_OVERAGE {
            Self::Severe
        } else if exceeded_by_percent >= MODERATE_OVERAGE {
            Self::Moderate
        } else {
            Self::Minor
        }
    }

    /// Returns a stable label for the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
