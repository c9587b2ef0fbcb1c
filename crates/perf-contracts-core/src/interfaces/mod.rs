// crates/perf-contracts-core/src/interfaces/mod.rs
// ============================================================================
// Module: Perf Contracts Interfaces
// Description: Backend-agnostic seams for mounting components and driving input.
// Purpose: Define the contract surfaces used by the measurement runtime.
// Dependencies: crate::runtime::recorder, async-trait, thiserror
// ============================================================================

//! ## Overview
//! The engine never renders UI or simulates input itself. Hosts implement
//! [`InteractionDriver`] to resolve selectors and fire events, and
//! [`ComponentHarness`] to mount and unmount the component under test. Both
//! receive the run's [`RenderRecorder`] by exclusive borrow so every commit
//! the host observes lands in the accumulator owned by the current run.
//! [`InteractionDriver::settle`] is the only suspension point of a run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

use crate::runtime::recorder::RenderRecorder;

// ============================================================================
// SECTION: Driver Events
// ============================================================================

/// Simulated UI event fired by an interaction driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    /// Pointer click.
    Click,
    /// One keystroke of a `type` interaction.
    Input {
        /// Character typed by this keystroke.
        character: char,
        /// Field value after this keystroke.
        value: String,
    },
    /// Focus event.
    Focus,
    /// Blur event.
    Blur,
    /// Scroll event.
    Scroll,
    /// Pointer-enter event.
    MouseEnter,
}

// ============================================================================
// SECTION: Interaction Driver
// ============================================================================

/// Interaction driver errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// Target selector did not resolve to an element.
    #[error("element not found: {selector}")]
    ElementNotFound {
        /// Selector that failed to resolve.
        selector: String,
    },
    /// Driver reported another failure.
    #[error("interaction driver error: {0}")]
    Failed(String),
}

/// Fires simulated events against a mounted component.
#[async_trait]
pub trait InteractionDriver: Send {
    /// Resolves `target` and fires `event`, reporting synchronous commits to `recorder`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::ElementNotFound`] when the selector does not resolve.
    fn dispatch(
        &mut self,
        target: &str,
        event: &DriverEvent,
        recorder: &mut RenderRecorder,
    ) -> Result<(), DriverError>;

    /// Yields until pending rendering work has been committed to `recorder`.
    async fn settle(&mut self, recorder: &mut RenderRecorder);
}

// ============================================================================
// SECTION: Component Harness
// ============================================================================

/// Component harness errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// Mounting the component failed.
    #[error("component mount failed: {0}")]
    Mount(String),
}

/// Mounts and unmounts the component under measurement.
pub trait ComponentHarness: InteractionDriver {
    /// Mounts a fresh instance, reporting mount commits to `recorder`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when the component cannot be mounted.
    fn mount(&mut self, recorder: &mut RenderRecorder) -> Result<(), HarnessError>;

    /// Tears down the mounted instance; called after every run, even when mount failed.
    fn unmount(&mut self);

    /// Heap delta in bytes for the last run, when the host can measure it.
    fn memory_delta(&self) -> Option<f64> {
        None
    }
}
