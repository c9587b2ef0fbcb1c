// crates/perf-contracts-config/src/context.rs
// ============================================================================
// Module: Config Context
// Description: Explicit holder for the loaded and resolved configuration.
// Purpose: Thread configuration through callers without global state.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`ConfigContext`] owns the sparse config, its optional source path, and
//! a lazily computed [`ResolvedConfig`]. Callers pass the context to every
//! entry point that needs contracts; `invalidate` drops the cached
//! resolution and `reload` re-reads the source file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use perf_contracts_core::ResolvedComponentContract;

use crate::config::ConfigError;
use crate::config::ContractConfig;
use crate::resolve::ResolvedConfig;
use crate::resolve::get_component_contract;
use crate::resolve::resolve_config;

// ============================================================================
// SECTION: Context
// ============================================================================

/// Loaded contract configuration with a cached resolution.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    /// File the config was loaded from, if any.
    source: Option<PathBuf>,
    /// Validated sparse config.
    config: ContractConfig,
    /// Cached resolution; `None` until first use or after invalidation.
    resolved: Option<ResolvedConfig>,
}

impl ConfigContext {
    /// Wraps an in-memory config after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the config breaks any rule.
    pub fn from_config(config: ContractConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source: None,
            config,
            resolved: None,
        })
    }

    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be loaded.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            source: Some(path.to_path_buf()),
            config: ContractConfig::load(path)?,
            resolved: None,
        })
    }

    /// Returns the source path, if the config came from a file.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns the sparse config.
    #[must_use]
    pub const fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Returns the resolved config, resolving it on first use.
    pub fn resolved(&mut self) -> &ResolvedConfig {
        self.resolved.get_or_insert_with(|| resolve_config(&self.config))
    }

    /// Returns the resolved contract for a component, if declared.
    pub fn component_contract(&mut self, component_name: &str) -> Option<&ResolvedComponentContract> {
        get_component_contract(self.resolved(), component_name)
    }

    /// Returns true when a resolution is cached.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Drops the cached resolution.
    pub fn invalidate(&mut self) {
        self.resolved = None;
    }

    /// Re-reads the source file and drops the cached resolution.
    ///
    /// On failure the previous config stays in place. In-memory contexts only
    /// drop their cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the source file cannot be loaded.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = &self.source {
            self.config = ContractConfig::load(path)?;
        }
        self.invalidate();
        Ok(())
    }
}
