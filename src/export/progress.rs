// ABOUTME: Synthetic progress simulation for exports whose render step reports no granular progress
// ABOUTME: Spawn-guarded tokio task emitting random 5-10 point increments, capped below completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Progress simulation.
//!
//! The renderer gives no granular progress, so the pipeline runs a simulator
//! task concurrently with the render await: every tick it advances a displayed
//! percentage by a random 5-10 points, capped at 90 so completion is never
//! falsely signaled. The pipeline cancels the task the instant the render
//! settles and then emits the single terminal 100.
//!
//! [`ProgressSimulator`] aborts its task in `Drop`, so a caller dropping the
//! whole export future mid-flight also stops the emissions.

use crate::config::nutrition::ExportConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One progress update, as delivered to the caller's channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Percent complete, 0-100, non-decreasing across a job
    pub percent: u8,
}

/// Sending half of a progress channel
pub type ProgressSender = mpsc::UnboundedSender<ProgressEvent>;

/// Create a progress channel pair
#[must_use]
pub fn progress_channel() -> (ProgressSender, mpsc::UnboundedReceiver<ProgressEvent>) {
    mpsc::unbounded_channel()
}

/// Handle to a running progress simulator task.
///
/// The task is aborted when the handle drops; [`ProgressSimulator::cancel`]
/// additionally awaits the task so no event can be observed afterwards.
pub struct ProgressSimulator {
    handle: JoinHandle<()>,
}

impl ProgressSimulator {
    /// Spawn the simulator, emitting into `sink` until cancelled or capped.
    #[must_use]
    pub fn spawn(sink: ProgressSender, config: &ExportConfig) -> Self {
        let tick = config.progress_tick();
        let step_min = config.progress_step_min;
        let step_max = config.progress_step_max.max(config.progress_step_min);
        let cap = config.progress_cap_percent;

        let handle = tokio::spawn(async move {
            let mut percent: u8 = 0;
            loop {
                tokio::time::sleep(tick).await;
                let step = rand::thread_rng().gen_range(step_min..=step_max);
                percent = percent.saturating_add(step).min(cap);
                if sink.send(ProgressEvent { percent }).is_err() {
                    break;
                }
                if percent >= cap {
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Abort the simulator and wait for the task to finish.
    ///
    /// After this returns, no further simulated event will be emitted.
    pub async fn cancel(mut self) {
        self.handle.abort();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
