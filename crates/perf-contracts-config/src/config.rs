// crates/perf-contracts-config/src/config.rs
// ============================================================================
// Module: Contract Config Model
// Description: Sparse contract configuration as written by users.
// Purpose: Load and validate contract files before resolution.
// Dependencies: perf-contracts-core, serde, serde_json, toml
// ============================================================================

//! ## Overview
//! The sparse model mirrors the contract file: every field is optional and
//! numeric fields stay `f64` until validation so that out-of-range values
//! are reported rather than rejected by the parser. Files are TOML unless
//! their extension is `.json`.
//!
//! Security posture: config inputs are untrusted; loading is size-bounded,
//! requires UTF-8, and fails closed on any validation error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::validate::ConfigValidationError;
use crate::validate::validate_config;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a contract file in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Sparse Model
// ============================================================================

/// Contract file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContractConfig {
    /// Measurement settings shared by every component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<GlobalConfig>,
    /// Component contracts keyed by component name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, ComponentContract>,
    /// Multi-component budgets keyed by aggregate name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aggregates: BTreeMap<String, AggregateContract>,
}

/// Global measurement settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlobalConfig {
    /// Measured runs per component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<f64>,
    /// Discarded runs before measuring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmup_runs: Option<f64>,
    /// Number of historical reports kept for comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_window: Option<f64>,
    /// Fractional slowdown treated as a regression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regression_threshold: Option<f64>,
    /// Directory for reports and history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Whether bundle statistics are collected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_stats: Option<bool>,
    /// Whether fix diagnostics are attached to results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<bool>,
}

/// Sparse budget for one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComponentContract {
    /// Maximum average render time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_render_time: Option<f64>,
    /// Maximum commits per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_render_count: Option<f64>,
    /// Maximum heap delta in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_delta: Option<f64>,
    /// Utilization above which a passing metric warns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<f64>,
    /// Per-interaction budgets keyed by interaction kind.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub interactions: BTreeMap<String, InteractionBudgetConfig>,
    /// Free-form metadata carried into reports.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, Value>,
}

/// Sparse budget for one interaction kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InteractionBudgetConfig {
    /// Maximum renders triggered by the kind per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_renders: Option<f64>,
}

/// Sparse budget spanning several components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AggregateContract {
    /// Member component names.
    #[serde(default)]
    pub components: Vec<String>,
    /// Maximum summed render time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total_render_time: Option<f64>,
    /// Maximum summed commits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total_render_count: Option<f64>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Contract file loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading the file.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML or JSON parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// File or contents violate a rule.
    #[error(transparent)]
    Invalid(#[from] ConfigValidationError),
}

impl ConfigError {
    /// Builds an invalid-config error from one message.
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(ConfigValidationError::new(vec![message.into()]))
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Contract file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl ConfigFormat {
    /// Chooses the syntax from a path's extension; TOML unless `.json`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl ContractConfig {
    /// Loads and validates a contract file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::invalid("config file exceeds size limit"));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::invalid("config file must be utf-8"))?;
        Self::parse(content, ConfigFormat::from_path(path))
    }

    /// Parses and validates contract file contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: Self = match format {
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration, reporting every broken rule at once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] listing every broken rule.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let errors = validate_config(self);
        if errors.is_empty() { Ok(()) } else { Err(ConfigValidationError::new(errors)) }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates path length limits before touching the filesystem.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::invalid("config path exceeds max length"));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::invalid("config path component too long"));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
