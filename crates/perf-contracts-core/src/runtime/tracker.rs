// crates/perf-contracts-core/src/runtime/tracker.rs
// ============================================================================
// Module: Interaction Tracker
// Description: Sequential per-interaction render attribution.
// Purpose: Attribute renders and render time to exactly one scripted interaction.
// Dependencies: crate::{core, interfaces, runtime::recorder}, thiserror
// ============================================================================

//! ## Overview
//! For each scripted interaction, in order, the tracker snapshots the run's
//! recorder, delegates the side effect to the interaction driver, awaits one
//! settle, and snapshots again. The difference between the two snapshots is
//! the interaction's cost. Interactions never overlap, so deltas cannot be
//! double counted. The tracker reads counters but never writes them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::interaction::InteractionKind;
use crate::core::interaction::InteractionResult;
use crate::core::interaction::InteractionSpec;
use crate::core::interaction::RawInteractionSpec;
use crate::core::interaction::UnsupportedInteractionKind;
use crate::core::numeric::safe_ratio;
use crate::interfaces::DriverError;
use crate::interfaces::DriverEvent;
use crate::interfaces::InteractionDriver;
use crate::runtime::recorder::RenderRecorder;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Interaction tracking errors. Each one aborts the current run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Target selector did not resolve.
    #[error("element not found: {selector}")]
    ElementNotFound {
        /// Selector that failed to resolve.
        selector: String,
    },
    /// Script entry names an unknown interaction kind.
    #[error(transparent)]
    UnsupportedInteractionKind(#[from] UnsupportedInteractionKind),
    /// Driver failed for another reason.
    #[error("interaction driver error: {0}")]
    Driver(String),
}

impl From<DriverError> for TrackerError {
    fn from(error: DriverError) -> Self {
        match error {
            DriverError::ElementNotFound {
                selector,
            } => Self::ElementNotFound {
                selector,
            },
            DriverError::Failed(message) => Self::Driver(message),
        }
    }
}

// ============================================================================
// SECTION: Script Parsing
// ============================================================================

/// Checks every raw script entry before any interaction runs.
///
/// # Errors
///
/// Returns [`TrackerError::UnsupportedInteractionKind`] for the first unknown kind.
pub fn parse_script(
    raw: impl IntoIterator<Item = RawInteractionSpec>,
) -> Result<Vec<InteractionSpec>, TrackerError> {
    raw.into_iter().map(|entry| InteractionSpec::try_from(entry).map_err(TrackerError::from)).collect()
}

/// Expands an interaction into the driver events that perform it.
///
/// `type` yields one input event per character of its text, carrying the
/// accumulated field value; every other kind yields a single event.
#[must_use]
pub fn driver_events(spec: &InteractionSpec) -> Vec<DriverEvent> {
    match spec.kind {
        InteractionKind::Click => vec![DriverEvent::Click],
        InteractionKind::Focus => vec![DriverEvent::Focus],
        InteractionKind::Blur => vec![DriverEvent::Blur],
        InteractionKind::Scroll => vec![DriverEvent::Scroll],
        InteractionKind::Hover => vec![DriverEvent::MouseEnter],
        InteractionKind::Type => {
            let text = spec.text.as_deref().unwrap_or_default();
            let mut value = String::with_capacity(text.len());
            text.chars()
                .map(|character| {
                    value.push(character);
                    DriverEvent::Input {
                        character,
                        value: value.clone(),
                    }
                })
                .collect()
        }
    }
}

// ============================================================================
// SECTION: Tracking
// ============================================================================

/// Performs one interaction and returns the render delta attributed to it.
///
/// # Errors
///
/// Returns [`TrackerError`] when the driver cannot perform the interaction.
pub async fn track_interaction<D>(
    driver: &mut D,
    recorder: &mut RenderRecorder,
    spec: &InteractionSpec,
) -> Result<InteractionResult, TrackerError>
where
    D: InteractionDriver + ?Sized,
{
    let before = recorder.snapshot();
    for event in driver_events(spec) {
        driver.dispatch(&spec.target, &event, recorder)?;
    }
    driver.settle(recorder).await;
    let after = recorder.snapshot();

    let renders_triggered = after.renders_since(&before);
    let total_render_time = after.time_since(&before);
    Ok(InteractionResult {
        interaction: spec.clone(),
        renders_triggered,
        total_render_time,
        average_render_time: safe_ratio(total_render_time, f64::from(renders_triggered)),
    })
}

/// Performs a script strictly in order, one interaction at a time.
///
/// # Errors
///
/// Returns the first [`TrackerError`]; no partial results are returned.
pub async fn track_interactions<D>(
    driver: &mut D,
    recorder: &mut RenderRecorder,
    script: &[InteractionSpec],
) -> Result<Vec<InteractionResult>, TrackerError>
where
    D: InteractionDriver + ?Sized,
{
    let mut results = Vec::with_capacity(script.len());
    for spec in script {
        results.push(track_interaction(driver, recorder, spec).await?);
    }
    Ok(results)
}
