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

//! Runs a container on headless ports.
//!
//! Usage: `sandbox [config.json] [frames]`

use anyhow::{Context as _, Result};
use croqueta_sdk::prelude::*;
use std::rc::Rc;
use std::time::Duration;

const DEFAULT_FRAMES: u64 = 120;
const FRAME_TIME: Duration = Duration::from_millis(16);

const VERTEX: &str = "#version 300 es
in vec2 a_position;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}";

const FRAGMENT: &str = "#version 300 es
precision mediump float;
out vec4 color;
void main() {
    color = vec4(1.0, 0.5, 0.2, 1.0);
}";

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => ContainerConfig::load(path)?,
        None => ContainerConfig {
            renderer: RendererConfig {
                shaders: Some(ShaderSources::new(VERTEX, FRAGMENT)),
                ..Default::default()
            },
            ..Default::default()
        },
    };
    let frames = match args.next() {
        Some(n) => n.parse().context("frame count must be a positive integer")?,
        None => DEFAULT_FRAMES,
    };

    let mut container = Container::new(config);
    let lifecycle: Rc<dyn EventListener<Lifecycle>> = Rc::new(|e: &Event<Lifecycle>| {
        log::info!("{} (croqueta {}, {} frames)", e.name, e.payload.version, e.payload.frame_count);
        anyhow::Ok(())
    });
    container.event_manager().subscribe(STARTED, &lifecycle);
    container.event_manager().subscribe(SHUTDOWN, &lifecycle);

    let (ports, host) = HostPorts::headless();
    container.start(ports)?;

    let mut ticked = 0;
    while ticked < frames && host.pacer.take_request() {
        std::thread::sleep(FRAME_TIME);
        container.tick();
        ticked += 1;
    }

    if let Some(kernel) = container.kernel() {
        log::info!("Smoothed frame time: {:?}", kernel.smoothed_delta());
    }
    container.shutdown()?;
    log::info!(
        "{} clears, {} flushes, {} live program(s).",
        host.surface.clear_count(),
        host.surface.flush_count(),
        host.surface.live_programs()
    );
    Ok(())
}
