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

//! Smoothing window over inter-frame durations.

use crate::base::assert_invariant;
use std::time::Duration;

/// A fixed-size circular buffer of the most recent inter-frame durations.
///
/// The buffer is pre-filled with a positive seed, so [`TimeHistory::average`]
/// is defined (and non-zero) before any frame has been recorded. After `N`
/// recorded frames the seed is fully flushed out.
#[derive(Debug, Clone)]
pub struct TimeHistory {
    samples: Box<[Duration]>,
    cursor: usize,
    previous: Duration,
}

impl TimeHistory {
    /// Creates a window of `size` samples, all set to `seed`, measuring from `now`.
    ///
    /// # Panics
    /// If `size` is zero or `seed` is zero.
    pub fn new(size: usize, seed: Duration, now: Duration) -> Self {
        assert_invariant(size > 0, "time history needs at least one sample");
        assert_invariant(!seed.is_zero(), "time history seed must be positive");
        Self {
            samples: vec![seed; size].into_boxed_slice(),
            cursor: 0,
            previous: now,
        }
    }

    /// Records the gap between the previous timestamp and `now`, overwriting
    /// the oldest sample.
    pub fn record(&mut self, now: Duration) {
        // A clock that stalls or jumps back yields a zero gap, never an underflow.
        let sample = now.saturating_sub(self.previous);
        self.samples[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % self.samples.len();
        self.previous = now;
    }

    /// The arithmetic mean of every buffered sample.
    pub fn average(&self) -> Duration {
        let total: Duration = self.samples.iter().sum();
        total / self.samples.len() as u32
    }

    /// The most recently recorded sample.
    pub fn latest(&self) -> Duration {
        let len = self.samples.len();
        self.samples[(self.cursor + len - 1) % len]
    }

    /// Number of samples in the window.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`: a history holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
