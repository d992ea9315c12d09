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

//! Ports to the host environment: frame pacing and time.
//!
//! The kernel never owns a thread or a timer. It asks a [`FramePacer`] for the
//! next frame and reads time from a [`Clock`]; both are injected, so a host
//! (a windowing loop, a browser, a test) decides how frames actually happen.

mod clock;
mod manual;

pub use self::clock::MonotonicClock;
pub use self::manual::{ManualClock, ManualPacer};

use std::time::Duration;

/// The host's "run the tick before the next paint" primitive.
///
/// A request is a promise that the host will call
/// [`Kernel::tick`](crate::kernel::Kernel::tick) once, at its next frame.
pub trait FramePacer {
    /// Requests one frame callback.
    fn request_frame(&self);
}

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}
