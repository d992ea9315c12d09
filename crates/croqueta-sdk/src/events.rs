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

//! Lifecycle events published by the [`Container`](crate::Container).

/// Published once the kernel is running.
pub const STARTED: &str = "croqueta.started";
/// Published when the container is shut down.
pub const SHUTDOWN: &str = "croqueta.shutdown";

/// Payload of the lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    /// The running version, see [`version`](crate::version).
    pub version: String,
    /// Frames ticked so far.
    pub frame_count: u64,
}
