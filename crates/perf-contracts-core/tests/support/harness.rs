// crates/perf-contracts-core/tests/support/harness.rs
// ============================================================================
// Module: Scripted Harness
// Description: Deterministic component harness for tracker and runner tests.
// ============================================================================
//! ## Overview
//! The scripted harness reports a fixed set of commits per target. Some
//! commits are reported synchronously from `dispatch`, others are deferred
//! until `settle`, mimicking asynchronous rendering work.

use std::collections::BTreeMap;

use async_trait::async_trait;
use perf_contracts_core::ComponentHarness;
use perf_contracts_core::DriverError;
use perf_contracts_core::DriverEvent;
use perf_contracts_core::HarnessError;
use perf_contracts_core::InteractionDriver;
use perf_contracts_core::RenderPhase;
use perf_contracts_core::RenderRecorder;

/// Commits a target reports for each event it receives.
#[derive(Debug, Clone, Default)]
pub struct TargetBehavior {
    /// Commit durations reported during dispatch.
    pub sync_renders: Vec<f64>,
    /// Commit durations reported on the next settle.
    pub deferred_renders: Vec<f64>,
}

/// Deterministic harness with per-target commit scripts.
#[derive(Debug, Default)]
pub struct ScriptedHarness {
    /// Commit durations reported on mount.
    pub mount_renders: Vec<f64>,
    /// Known targets keyed by selector.
    pub targets: BTreeMap<String, TargetBehavior>,
    /// Mount failure message, when mounting should fail.
    pub fail_mount: Option<String>,
    /// Memory delta reported after each run.
    pub memory: Option<f64>,
    /// Number of mount calls.
    pub mounts: usize,
    /// Number of unmount calls.
    pub unmounts: usize,
    /// Number of settle calls.
    pub settles: usize,
    /// Every dispatched event in order.
    pub dispatched: Vec<(String, DriverEvent)>,
    /// Commits waiting for the next settle.
    pending: Vec<f64>,
}

impl ScriptedHarness {
    /// Creates a harness that reports `mount_renders` on mount.
    pub fn new(mount_renders: &[f64]) -> Self {
        Self {
            mount_renders: mount_renders.to_vec(),
            ..Self::default()
        }
    }

    /// Adds a target with synchronous and deferred commits per event.
    pub fn with_target(mut self, selector: &str, sync: &[f64], deferred: &[f64]) -> Self {
        self.targets.insert(
            selector.to_string(),
            TargetBehavior {
                sync_renders: sync.to_vec(),
                deferred_renders: deferred.to_vec(),
            },
        );
        self
    }
}

#[async_trait]
impl InteractionDriver for ScriptedHarness {
    fn dispatch(
        &mut self,
        target: &str,
        event: &DriverEvent,
        recorder: &mut RenderRecorder,
    ) -> Result<(), DriverError> {
        let Some(behavior) = self.targets.get(target) else {
            return Err(DriverError::ElementNotFound {
                selector: target.to_string(),
            });
        };
        for duration in &behavior.sync_renders {
            recorder.on_commit(RenderPhase::Update, *duration, *duration, 0.0, *duration);
        }
        self.pending.extend(behavior.deferred_renders.iter().copied());
        self.dispatched.push((target.to_string(), event.clone()));
        Ok(())
    }

    async fn settle(&mut self, recorder: &mut RenderRecorder) {
        tokio::task::yield_now().await;
        for duration in self.pending.drain(..) {
            recorder.on_commit(RenderPhase::Update, duration, duration, 0.0, duration);
        }
        self.settles += 1;
    }
}

impl ComponentHarness for ScriptedHarness {
    fn mount(&mut self, recorder: &mut RenderRecorder) -> Result<(), HarnessError> {
        self.mounts += 1;
        if let Some(message) = &self.fail_mount {
            return Err(HarnessError::Mount(message.clone()));
        }
        for duration in &self.mount_renders {
            recorder.on_commit(RenderPhase::Mount, *duration, *duration, 0.0, *duration);
        }
        Ok(())
    }

    fn unmount(&mut self) {
        self.pending.clear();
        self.unmounts += 1;
    }

    fn memory_delta(&self) -> Option<f64> {
        self.memory
    }
}
