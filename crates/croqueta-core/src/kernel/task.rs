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

use std::time::Duration;

/// A unit of per-frame work driven by the [`Kernel`](super::Kernel).
///
/// Implementors are usually built with an `Rc<Context>` for shared application
/// state. `update` is called once per tick and owns no scheduling logic: it
/// must tolerate being called every frame for as long as the kernel runs.
pub trait Task {
    /// A human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Advances the task by the smoothed frame `delta`.
    fn update(&mut self, delta: Duration);
}
