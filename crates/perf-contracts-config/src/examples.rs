// crates/perf-contracts-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example contract file.
// Purpose: Deterministic starting point for new projects and docs.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example contract file. The example is kept valid by tests.

/// Returns a canonical example `perf-contracts.toml`.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[global]
runs = 10
warmupRuns = 1
historyWindow = 20
regressionThreshold = 0.15
outputDir = ".perf-contracts"
bundleStats = false
diagnostics = true

[components.SearchBox]
maxRenderTime = 16
maxRenderCount = 5
warningThreshold = 0.8

[components.SearchBox.interactions.type]
maxRenders = 3

[components.SearchBox.interactions.click]
maxRenders = 2

[components.SearchBox.meta]
owner = "web-platform"

[components.ResultsList]
maxRenderTime = 24
maxMemoryDelta = 1048576

[aggregates.search]
components = ["SearchBox", "ResultsList"]
maxTotalRenderTime = 120
maxTotalRenderCount = 40
"#,
    )
}
