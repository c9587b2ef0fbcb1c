// crates/perf-contracts-config/src/resolve.rs
// ============================================================================
// Module: Contract Resolution
// Description: Fills sparse contracts with defaults and unbounded sentinels.
// Purpose: Give the validator fully specified budgets.
// Dependencies: perf-contracts-core
// ============================================================================

//! ## Overview
//! Resolution is a pure, idempotent function of the sparse config. Absent
//! budgets become [`UNBOUNDED`], absent settings take the documented
//! defaults, and the input is never modified.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use perf_contracts_core::DEFAULT_WARNING_THRESHOLD;
use perf_contracts_core::InteractionBudget;
use perf_contracts_core::ResolvedAggregate;
use perf_contracts_core::ResolvedComponentContract;
use perf_contracts_core::RunPlan;
use perf_contracts_core::UNBOUNDED;
use perf_contracts_core::core::numeric::round_count;
use serde::Serialize;

use crate::config::AggregateContract;
use crate::config::ComponentContract;
use crate::config::ContractConfig;
use crate::config::GlobalConfig;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default measured runs.
pub const DEFAULT_RUNS: u32 = 10;
/// Default warmup runs.
pub const DEFAULT_WARMUP_RUNS: u32 = 1;
/// Default history window.
pub const DEFAULT_HISTORY_WINDOW: u32 = 20;
/// Default regression threshold.
pub const DEFAULT_REGRESSION_THRESHOLD: f64 = 0.15;
/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = ".perf-contracts";

// ============================================================================
// SECTION: Resolved Model
// ============================================================================

/// Fully specified global settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGlobalConfig {
    /// Measured runs per component.
    pub runs: u32,
    /// Discarded runs before measuring.
    pub warmup_runs: u32,
    /// Number of historical reports kept.
    pub history_window: u32,
    /// Fractional slowdown treated as a regression.
    pub regression_threshold: f64,
    /// Directory for reports and history.
    pub output_dir: String,
    /// Whether bundle statistics are collected.
    pub bundle_stats: bool,
    /// Whether fix diagnostics are attached to results.
    pub diagnostics: bool,
}

impl Default for ResolvedGlobalConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            warmup_runs: DEFAULT_WARMUP_RUNS,
            history_window: DEFAULT_HISTORY_WINDOW,
            regression_threshold: DEFAULT_REGRESSION_THRESHOLD,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            bundle_stats: false,
            diagnostics: true,
        }
    }
}

impl ResolvedGlobalConfig {
    /// Returns the run counts for the measurement runner.
    #[must_use]
    pub const fn run_plan(&self) -> RunPlan {
        RunPlan {
            runs: self.runs,
            warmup_runs: self.warmup_runs,
        }
    }
}

/// Fully resolved contract configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    /// Global settings.
    pub global: ResolvedGlobalConfig,
    /// Component contracts keyed by name.
    pub components: BTreeMap<String, ResolvedComponentContract>,
    /// Aggregate budgets keyed by name.
    pub aggregates: BTreeMap<String, ResolvedAggregate>,
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves a sparse config into fully specified contracts.
#[must_use]
pub fn resolve_config(config: &ContractConfig) -> ResolvedConfig {
    ResolvedConfig {
        global: config.global.as_ref().map(resolve_global).unwrap_or_default(),
        components: config
            .components
            .iter()
            .map(|(name, contract)| (name.clone(), resolve_component_contract(contract)))
            .collect(),
        aggregates: config
            .aggregates
            .iter()
            .map(|(name, aggregate)| (name.clone(), resolve_aggregate(aggregate)))
            .collect(),
    }
}

/// Resolves global settings.
#[must_use]
pub fn resolve_global(global: &GlobalConfig) -> ResolvedGlobalConfig {
    let defaults = ResolvedGlobalConfig::default();
    ResolvedGlobalConfig {
        runs: global.runs.map_or(defaults.runs, round_count),
        warmup_runs: global.warmup_runs.map_or(defaults.warmup_runs, round_count),
        history_window: global.history_window.map_or(defaults.history_window, round_count),
        regression_threshold: global.regression_threshold.unwrap_or(defaults.regression_threshold),
        output_dir: global.output_dir.clone().unwrap_or(defaults.output_dir),
        bundle_stats: global.bundle_stats.unwrap_or(defaults.bundle_stats),
        diagnostics: global.diagnostics.unwrap_or(defaults.diagnostics),
    }
}

/// Resolves one component contract.
#[must_use]
pub fn resolve_component_contract(contract: &ComponentContract) -> ResolvedComponentContract {
    ResolvedComponentContract {
        max_render_time: contract.max_render_time.unwrap_or(UNBOUNDED),
        max_render_count: contract.max_render_count.unwrap_or(UNBOUNDED),
        max_memory_delta: contract.max_memory_delta.unwrap_or(UNBOUNDED),
        warning_threshold: contract.warning_threshold.unwrap_or(DEFAULT_WARNING_THRESHOLD),
        interactions: contract
            .interactions
            .iter()
            .map(|(kind, budget)| {
                (
                    kind.clone(),
                    InteractionBudget {
                        max_renders: budget.max_renders.unwrap_or(UNBOUNDED),
                    },
                )
            })
            .collect(),
        meta: contract.meta.clone(),
    }
}

/// Resolves one aggregate budget.
#[must_use]
pub fn resolve_aggregate(aggregate: &AggregateContract) -> ResolvedAggregate {
    ResolvedAggregate {
        components: aggregate.components.clone(),
        max_total_render_time: aggregate.max_total_render_time.unwrap_or(UNBOUNDED),
        max_total_render_count: aggregate.max_total_render_count.unwrap_or(UNBOUNDED),
    }
}

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Returns the resolved contract for a component, if one is declared.
#[must_use]
pub fn get_component_contract<'a>(
    config: &'a ResolvedConfig,
    component_name: &str,
) -> Option<&'a ResolvedComponentContract> {
    config.components.get(component_name)
}

/// Returns true when a contract is declared for the component.
#[must_use]
pub fn has_contract(config: &ResolvedConfig, component_name: &str) -> bool {
    config.components.contains_key(component_name)
}

/// Returns the names of every contracted component, sorted.
#[must_use]
pub fn get_contracted_components(config: &ResolvedConfig) -> Vec<&str> {
    config.components.keys().map(String::as_str).collect()
}
