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

//! `kernel` module – the per-frame runtime nucleus.
//!
//! Contents:
//! * [`scheduler`]: the [`Kernel`], which ticks every registered task once per host frame
//! * [`history`]: the smoothing window that turns raw frame gaps into a stable delta
//! * [`task`]: the [`Task`] contract implemented by per-frame work
//! * [`config`]: tunables for the smoothing window

pub mod config;
pub mod history;
pub mod scheduler;
pub mod task;

pub use self::config::KernelConfig;
pub use self::history::TimeHistory;
pub use self::scheduler::Kernel;
pub use self::task::Task;
