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

//! Hand-driven ports for deterministic hosts (headless runs, tests).
//!
//! Both types are cheap handles over shared state: keep a clone, give the
//! other one to the kernel, and drive it from the outside.

use super::{Clock, FramePacer};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A [`FramePacer`] that only records requests.
///
/// The host polls [`ManualPacer::take_request`] and ticks the kernel when it
/// returns `true`.
#[derive(Debug, Clone, Default)]
pub struct ManualPacer {
    pending: Rc<Cell<bool>>,
    requests: Rc<Cell<u64>>,
}

impl ManualPacer {
    /// Creates a pacer with no pending request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a frame was requested and not yet taken.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Consumes the pending request, if any.
    pub fn take_request(&self) -> bool {
        self.pending.replace(false)
    }

    /// Total number of requests made since creation.
    pub fn request_count(&self) -> u64 {
        self.requests.get()
    }
}

impl FramePacer for ManualPacer {
    fn request_frame(&self) {
        if self.pending.replace(true) {
            log::warn!("Frame requested while a previous request is still pending.");
        }
        self.requests.set(self.requests.get() + 1);
    }
}

/// A [`Clock`] that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock standing at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.now.set(self.now.get() + step);
    }

    /// Moves the clock to `at`. Going backwards is rejected.
    pub fn set(&self, at: Duration) {
        crate::base::assert_invariant(at >= self.now.get(), "ManualClock must stay monotonic");
        self.now.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
