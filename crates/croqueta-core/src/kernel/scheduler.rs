// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The frame scheduler.

use super::{KernelConfig, Task, TimeHistory};
use crate::base::assert_invariant;
use crate::platform::{Clock, FramePacer};
use std::fmt;
use std::time::Duration;

/// Drives every registered [`Task`] once per host frame with a smoothed delta.
///
/// The kernel is cooperative: it never blocks or owns a thread. [`Kernel::start`]
/// asks the [`FramePacer`] for a frame; the host answers by calling
/// [`Kernel::tick`], which updates the tasks and, while running, asks for the
/// next frame.
pub struct Kernel {
    enabled: bool,
    frame_requested: bool,
    tasks: Vec<Box<dyn Task>>,
    history: TimeHistory,
    pacer: Box<dyn FramePacer>,
    clock: Box<dyn Clock>,
    frame_count: u64,
}

impl Kernel {
    /// Creates a stopped kernel with no tasks.
    ///
    /// # Panics
    /// If `config` does not pass [`KernelConfig::validate`].
    pub fn new(config: &KernelConfig, pacer: Box<dyn FramePacer>, clock: Box<dyn Clock>) -> Self {
        assert_invariant(config.validate().is_ok(), "invalid kernel configuration");
        let history = TimeHistory::new(config.history_size, config.seed_delta, clock.now());
        log::info!(
            "Kernel initialized (smoothing window: {} frames).",
            config.history_size
        );
        Self {
            enabled: false,
            frame_requested: false,
            tasks: Vec::new(),
            history,
            pacer,
            clock,
            frame_count: 0,
        }
    }

    /// Appends a task. Takes effect on the next tick, whether or not the kernel is running.
    pub fn add_task(&mut self, task: Box<dyn Task>) {
        log::debug!("Task '{}' added to the kernel.", task.name());
        self.tasks.push(task);
    }

    /// Starts ticking. Does nothing if the kernel is already running.
    pub fn start(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        log::info!("Kernel started.");
        // A frame requested before a stop is still on its way and will
        // resume the chain by itself.
        if !self.frame_requested {
            self.request_frame();
        }
    }

    /// Stops ticking after the in-flight frame, if any.
    ///
    /// An already requested frame is not cancelled: its tick still runs but
    /// will not request another one.
    pub fn stop(&mut self) {
        if self.enabled {
            log::info!("Kernel stopped after {} frame(s).", self.frame_count);
        }
        self.enabled = false;
    }

    /// Runs one frame. Called by the host when a requested frame arrives.
    ///
    /// Records the frame gap, computes the smoothed delta, updates every task
    /// in registration order, then requests the next frame if still running.
    pub fn tick(&mut self) {
        self.frame_requested = false;
        self.history.record(self.clock.now());
        let delta = self.history.average();
        self.frame_count += 1;
        log::trace!("Tick #{} (delta: {:?}).", self.frame_count, delta);

        for task in self.tasks.iter_mut() {
            task.update(delta);
        }

        if self.enabled {
            self.request_frame();
        } else {
            log::debug!("Kernel halted; no further frame requested.");
        }
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
        self.pacer.request_frame();
    }

    /// Returns `true` between [`Kernel::start`] and [`Kernel::stop`].
    pub fn is_running(&self) -> bool {
        self.enabled
    }

    /// Number of registered tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Names of the registered tasks, in tick order.
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Number of ticks run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The delta the next tick would use if no time passed.
    pub fn smoothed_delta(&self) -> Duration {
        self.history.average()
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel")
            .field("enabled", &self.enabled)
            .field("frame_requested", &self.frame_requested)
            .field("tasks", &self.task_names())
            .field("frame_count", &self.frame_count)
            .finish()
    }
}
