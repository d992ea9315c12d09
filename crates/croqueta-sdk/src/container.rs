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

use crate::events::{self, Lifecycle};
use crate::{version, ContainerConfig, HostPorts};
use anyhow::Result;
use croqueta_core::renderer::Renderer;
use croqueta_core::{Context, CroquetaError, Event, EventManager, Kernel, Task};
use std::rc::Rc;

/// Wires the kernel, the event manager and the renderer together.
///
/// The event manager exists from construction so listeners can subscribe to
/// [`events::STARTED`] before the container starts. Everything that needs a
/// surface is built by [`Container::start`].
pub struct Container {
    config: ContainerConfig,
    event_manager: Rc<EventManager>,
    context: Option<Rc<Context>>,
    kernel: Option<Kernel>,
    pending_tasks: Vec<Box<dyn Task>>,
}

impl Container {
    /// Creates a stopped container.
    pub fn new(config: ContainerConfig) -> Self {
        log::info!("croqueta {}: container created.", version());
        Self {
            config,
            event_manager: Rc::new(EventManager::new()),
            context: None,
            kernel: None,
            pending_tasks: Vec::new(),
        }
    }

    /// Builds the runtime on `ports` and starts the kernel.
    ///
    /// Tasks queued with [`Container::add_task`] run after the renderer.
    /// Calling `start` on a container that already has a kernel resumes it and
    /// ignores `ports`.
    ///
    /// ## Errors
    /// * [`CroquetaError::SurfaceUnsupported`] if `ports` carries no surface.
    /// * [`CroquetaError::MissingParameter`] for an invalid configuration.
    /// * [`CroquetaError::Shader`] if the configured shader fails to build.
    /// * Any error returned by a [`events::STARTED`] listener. The kernel is
    ///   already running when it is reported.
    pub fn start(&mut self, ports: HostPorts) -> Result<()> {
        if let Some(kernel) = self.kernel.as_mut() {
            if kernel.is_running() {
                log::warn!("Container already running; start ignored.");
                return Ok(());
            }
            log::info!("Resuming container.");
            kernel.start();
            return self.publish(events::STARTED);
        }

        self.config.validate()?;
        let surface = ports.surface.ok_or_else(|| {
            log::error!("No render surface available.");
            CroquetaError::SurfaceUnsupported
        })?;

        let context = Rc::new(Context::new());
        context.set("croqueta.version", version());

        let renderer = Renderer::new(surface, Rc::clone(&context), &self.config.renderer)?;

        let mut kernel = Kernel::new(&self.config.kernel, ports.pacer, ports.clock);
        kernel.add_task(Box::new(renderer));
        for task in self.pending_tasks.drain(..) {
            kernel.add_task(task);
        }
        kernel.start();

        self.context = Some(context);
        self.kernel = Some(kernel);
        log::info!("Container started.");
        self.publish(events::STARTED)
    }

    /// Queues `task` for the kernel, or appends it directly once started.
    pub fn add_task(&mut self, task: Box<dyn Task>) {
        match self.kernel.as_mut() {
            Some(kernel) => kernel.add_task(task),
            None => self.pending_tasks.push(task),
        }
    }

    /// Forwards a host frame to the kernel.
    pub fn tick(&mut self) {
        match self.kernel.as_mut() {
            Some(kernel) => kernel.tick(),
            None => log::warn!("Frame received before the container was started."),
        }
    }

    /// Stops the kernel and publishes [`events::SHUTDOWN`].
    ///
    /// Does nothing if the container is not running. The runtime is kept, so
    /// a later [`Container::start`] resumes it.
    pub fn shutdown(&mut self) -> Result<()> {
        let Some(kernel) = self.kernel.as_mut().filter(|k| k.is_running()) else {
            return Ok(());
        };
        kernel.stop();
        log::info!("Container shut down.");
        self.publish(events::SHUTDOWN)
    }

    /// The event manager shared with the host.
    pub fn event_manager(&self) -> &Rc<EventManager> {
        &self.event_manager
    }

    /// The root context, once started.
    pub fn context(&self) -> Option<&Rc<Context>> {
        self.context.as_ref()
    }

    /// The kernel, once started.
    pub fn kernel(&self) -> Option<&Kernel> {
        self.kernel.as_ref()
    }

    /// Returns `true` while the kernel is running.
    pub fn is_running(&self) -> bool {
        self.kernel.as_ref().is_some_and(Kernel::is_running)
    }

    fn publish(&self, name: &'static str) -> Result<()> {
        let payload = Lifecycle {
            version: version(),
            frame_count: self.kernel.as_ref().map_or(0, Kernel::frame_count),
        };
        self.event_manager.publish(&Event::new(name, payload))
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::error!("Shutdown listener failed while dropping the container: {e:#}");
        }
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("config", &self.config)
            .field("kernel", &self.kernel)
            .field("pending_tasks", &self.pending_tasks.len())
            .finish_non_exhaustive()
    }
}
