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

//! # Croqueta Core
//!
//! Foundational crate containing the frame kernel, the event manager, the
//! render surface contract and the shader lifecycle. Concrete surfaces and
//! host integrations live in `croqueta-infra`.
//!
//! Everything in this crate runs on a single logical thread driven by the
//! host's frame pacing, so shared state uses `Rc`/`RefCell` rather than locks.

#![warn(missing_docs)]

pub mod base;
pub mod error;
pub mod event;
pub mod kernel;
pub mod platform;
pub mod renderer;

pub use base::context::Context;
pub use error::CroquetaError;
pub use event::{Event, EventListener, EventManager};
pub use kernel::{Kernel, KernelConfig, Task};
