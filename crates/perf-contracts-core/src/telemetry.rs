// crates/perf-contracts-core/src/telemetry.rs
// ============================================================================
// Module: Measurement Telemetry
// Description: Structured lifecycle events for measurement runs.
// Purpose: Emit JSON-line run logs without hard logging dependencies.
// Dependencies: crate::core, serde, serde_json
// ============================================================================

//! ## Overview
//! The measurement runner reports run lifecycle events to a [`RunEventSink`].
//! Sinks are deliberately thin so hosts can route events to their own
//! logging pipeline. Validation never logs; it stays a pure function.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Event Labels
// ============================================================================

/// Run lifecycle event kind.
///
/// # Invariants
/// - Labels are stable for log consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunEventKind {
    /// A run mounted its component.
    RunStarted,
    /// One interaction finished and its delta was recorded.
    InteractionMeasured,
    /// A run completed every scripted interaction.
    RunCompleted,
    /// A run aborted.
    RunFailed,
    /// Measured runs were merged.
    AggregationCompleted,
}

// ============================================================================
// SECTION: Event Payload
// ============================================================================

/// Run lifecycle event payload.
///
/// # Invariants
/// - Optional fields are `None` when they do not apply to the event kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunEvent {
    /// Event kind.
    pub event: RunEventKind,
    /// Component under measurement.
    pub component: String,
    /// Host-supplied measurement timestamp.
    pub timestamp: Timestamp,
    /// Zero-based run index within its phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_index: Option<usize>,
    /// True for discarded warmup runs.
    pub warmup: bool,
    /// Commits observed so far or in total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_count: Option<u32>,
    /// Interaction index or count, depending on the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactions: Option<usize>,
    /// Failure description for aborted runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunEvent {
    /// Creates an event with no optional fields set.
    #[must_use]
    pub fn new(event: RunEventKind, component: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            event,
            component: component.into(),
            timestamp,
            run_index: None,
            warmup: false,
            render_count: None,
            interactions: None,
            error: None,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Sink for run lifecycle events.
pub trait RunEventSink: Send + Sync {
    /// Records an event.
    fn record(&self, event: &RunEvent);
}

/// Sink that logs JSON lines to stderr.
pub struct StderrRunEventSink;

impl RunEventSink for StderrRunEventSink {
    fn record(&self, event: &RunEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }
}

/// Sink that appends JSON lines to a file.
pub struct FileRunEventSink {
    /// File handle used for append-only logging.
    file: Mutex<File>,
}

impl FileRunEventSink {
    /// Opens the log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl RunEventSink for FileRunEventSink {
    fn record(&self, event: &RunEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op sink.
pub struct NoopRunEventSink;

impl RunEventSink for NoopRunEventSink {
    fn record(&self, _event: &RunEvent) {}
}
