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

use croqueta_core::platform::{Clock, FramePacer, ManualPacer, MonotonicClock};
use croqueta_core::renderer::RenderSurface;
use croqueta_infra::{GlowSurface, HeadlessSurface, WinitFramePacer};
use std::rc::Rc;
use std::sync::Arc;
use winit::window::Window;

/// The host services a [`Container`](crate::Container) runs on.
pub struct HostPorts {
    /// The drawing surface. `None` when the host could not provide one.
    pub surface: Option<Rc<dyn RenderSurface>>,
    /// Schedules the next frame.
    pub pacer: Box<dyn FramePacer>,
    /// Monotonic time source.
    pub clock: Box<dyn Clock>,
}

/// Handles the caller keeps to drive a headless container.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    /// Polled to know when to tick.
    pub pacer: ManualPacer,
    /// Inspected for clears and live GPU objects.
    pub surface: Rc<HeadlessSurface>,
}

impl HostPorts {
    /// Groups explicit ports.
    pub fn new(
        surface: Option<Rc<dyn RenderSurface>>,
        pacer: Box<dyn FramePacer>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            surface,
            pacer,
            clock,
        }
    }

    /// Ports for a `winit` window drawn through `glow`.
    ///
    /// The host must call `Container::tick` on every
    /// `WindowEvent::RedrawRequested` of `window`.
    pub fn windowed(window: Arc<Window>, surface: GlowSurface) -> Self {
        Self::new(
            Some(Rc::new(surface) as Rc<dyn RenderSurface>),
            Box::new(WinitFramePacer::new(window)),
            Box::new(MonotonicClock::new()),
        )
    }

    /// In-memory ports with a wall clock and a hand-polled pacer.
    pub fn headless() -> (Self, HeadlessHost) {
        let surface = Rc::new(HeadlessSurface::new());
        let pacer = ManualPacer::new();
        let ports = Self::new(
            Some(surface.clone() as Rc<dyn RenderSurface>),
            Box::new(pacer.clone()),
            Box::new(MonotonicClock::new()),
        );
        (ports, HeadlessHost { pacer, surface })
    }
}

impl std::fmt::Debug for HostPorts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostPorts")
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}
