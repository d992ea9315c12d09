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

//! The public-facing API of croqueta.
//!
//! [`Container`] bootstraps a running application from a [`ContainerConfig`]
//! and a set of [`HostPorts`]; the host then forwards every frame it is asked
//! for to [`Container::tick`].

mod config;
mod container;
pub mod events;
mod ports;
mod version;

pub use config::ContainerConfig;
pub use container::Container;
pub use ports::{HeadlessHost, HostPorts};
pub use version::{version, VERSION_DEV, VERSION_MAJOR, VERSION_MINOR, VERSION_REV};

pub mod prelude {
    //! Everything an application needs to get a frame on screen.
    pub use crate::events::{Lifecycle, SHUTDOWN, STARTED};
    pub use crate::{Container, ContainerConfig, HostPorts};
    pub use croqueta_core::renderer::{ClearColor, RendererConfig, ShaderSources};
    pub use croqueta_core::{Context, CroquetaError, Event, EventListener, EventManager, Task};
}
