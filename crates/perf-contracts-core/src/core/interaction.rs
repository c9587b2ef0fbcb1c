// crates/perf-contracts-core/src/core/interaction.rs
// ============================================================================
// Module: Interaction Model
// Description: Scripted interaction declarations and their measured deltas.
// Purpose: Describe what to perform and what each performed step cost.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! An [`InteractionSpec`] declares a single simulated user action against a
//! component. An [`InteractionResult`] records the renders and render time
//! attributed to exactly that action within one run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Interaction Kind
// ============================================================================

/// Supported interaction kinds.
///
/// # Invariants
/// - Labels returned by [`InteractionKind::as_str`] are stable and used as
///   metric-name suffixes and contract keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Single click.
    Click,
    /// Text entry, replayed one character at a time.
    Type,
    /// Focus the target.
    Focus,
    /// Blur the target.
    Blur,
    /// Scroll the target.
    Scroll,
    /// Pointer enters the target.
    Hover,
}

impl InteractionKind {
    /// All supported kinds in declaration order.
    pub const ALL: [Self; 6] =
        [Self::Click, Self::Type, Self::Focus, Self::Blur, Self::Scroll, Self::Hover];

    /// Returns the stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Type => "type",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Scroll => "scroll",
            Self::Hover => "hover",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a script names an interaction kind the engine cannot perform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported interaction kind: {kind}")]
pub struct UnsupportedInteractionKind {
    /// Kind label as written in the script.
    pub kind: String,
}

impl FromStr for InteractionKind {
    type Err = UnsupportedInteractionKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value).ok_or_else(|| {
            UnsupportedInteractionKind {
                kind: value.to_string(),
            }
        })
    }
}

// ============================================================================
// SECTION: Interaction Spec
// ============================================================================

/// Declaration of one scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSpec {
    /// Interaction kind.
    pub kind: InteractionKind,
    /// Selector resolved by the interaction driver.
    pub target: String,
    /// Text to replay for `type` interactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl InteractionSpec {
    /// Creates an interaction without text.
    #[must_use]
    pub fn new(kind: InteractionKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            text: None,
        }
    }

    /// Creates a `type` interaction replaying `text`.
    #[must_use]
    pub fn typing(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: InteractionKind::Type,
            target: target.into(),
            text: Some(text.into()),
        }
    }

    /// Parses a script entry whose kind is given as a raw label.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedInteractionKind`] when `kind` is not a supported label.
    pub fn parse(
        kind: &str,
        target: impl Into<String>,
        text: Option<String>,
    ) -> Result<Self, UnsupportedInteractionKind> {
        Ok(Self {
            kind: kind.parse()?,
            target: target.into(),
            text,
        })
    }
}

/// Script entry as written by a host, before its kind is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInteractionSpec {
    /// Interaction kind label.
    pub kind: String,
    /// Selector resolved by the interaction driver.
    pub target: String,
    /// Text to replay for `type` interactions.
    #[serde(default)]
    pub text: Option<String>,
}

impl TryFrom<RawInteractionSpec> for InteractionSpec {
    type Error = UnsupportedInteractionKind;

    fn try_from(raw: RawInteractionSpec) -> Result<Self, Self::Error> {
        Self::parse(&raw.kind, raw.target, raw.text)
    }
}

// ============================================================================
// SECTION: Interaction Result
// ============================================================================

/// Render delta attributed to one interaction within one run.
///
/// # Invariants
/// - `average_render_time == total_render_time / renders_triggered`, or `0`
///   when no renders were triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResult {
    /// Interaction that produced the delta.
    pub interaction: InteractionSpec,
    /// Commits observed between the before and after snapshots.
    pub renders_triggered: u32,
    /// Actual render time observed between the snapshots.
    pub total_render_time: f64,
    /// Mean render time per triggered commit.
    pub average_render_time: f64,
}
