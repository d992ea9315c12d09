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

//! Integration tests for the container bootstrap on headless ports.

use croqueta_core::platform::{ManualClock, ManualPacer};
use croqueta_sdk::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const VERTEX: &str = "#version 300 es\nvoid main() { gl_Position = vec4(0.0); }";
const FRAGMENT: &str = "#version 300 es\nprecision mediump float;\nout vec4 c;\nvoid main() { c = vec4(1.0); }";

fn record_lifecycle(container: &Container) -> (Rc<RefCell<Vec<String>>>, Rc<dyn EventListener<Lifecycle>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let listener: Rc<dyn EventListener<Lifecycle>> = Rc::new(move |e: &Event<Lifecycle>| {
        sink.borrow_mut().push(e.name.to_string());
        anyhow::Ok(())
    });
    container.event_manager().subscribe(STARTED, &listener);
    container.event_manager().subscribe(SHUTDOWN, &listener);
    (seen, listener)
}

#[test]
fn test_start_tick_shutdown_on_headless_host() {
    let mut container = Container::new(ContainerConfig::default());
    let (seen, _listener) = record_lifecycle(&container);
    let (ports, host) = HostPorts::headless();

    container.start(ports).expect("headless start");
    assert!(container.is_running());
    assert!(container.context().is_some());
    assert_eq!(container.kernel().unwrap().task_names(), vec!["renderer"]);

    for _ in 0..5 {
        assert!(host.pacer.take_request());
        container.tick();
    }
    assert_eq!(host.surface.clear_count(), 5);
    assert_eq!(host.surface.flush_count(), 5);
    assert_eq!(host.surface.clear_color(), ClearColor::default());

    container.shutdown().unwrap();
    container.shutdown().unwrap();
    assert!(!container.is_running());
    assert_eq!(*seen.borrow(), vec![STARTED.to_string(), SHUTDOWN.to_string()]);
}

#[test]
fn test_missing_surface_is_surface_unsupported() {
    let mut container = Container::new(ContainerConfig::default());
    let ports = HostPorts::new(None, Box::new(ManualPacer::new()), Box::new(ManualClock::new()));

    let err = container.start(ports).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CroquetaError>(),
        Some(CroquetaError::SurfaceUnsupported)
    ));
    assert!(!container.is_running());
}

#[test]
fn test_configured_shader_is_built_and_freed() {
    let config = ContainerConfig {
        renderer: RendererConfig {
            shaders: Some(ShaderSources::new(VERTEX, FRAGMENT)),
            ..Default::default()
        },
        ..Default::default()
    };
    let (ports, host) = HostPorts::headless();
    {
        let mut container = Container::new(config);
        container.start(ports).unwrap();
        assert_eq!(host.surface.live_programs(), 1);
        assert_eq!(host.surface.live_shaders(), 2);
    }
    assert_eq!(host.surface.live_programs(), 0);
    assert_eq!(host.surface.live_shaders(), 0);
}

#[test]
fn test_broken_shader_fails_start() {
    let config = ContainerConfig {
        renderer: RendererConfig {
            shaders: Some(ShaderSources::new(VERTEX, "out vec4 c;")),
            ..Default::default()
        },
        ..Default::default()
    };
    let mut container = Container::new(config);
    let (ports, host) = HostPorts::headless();

    let err = container.start(ports).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CroquetaError>(),
        Some(CroquetaError::Shader(_))
    ));
    assert!(err.to_string().contains("Fragment shader"));
    assert_eq!(host.surface.live_shaders(), 0);
    assert!(!host.pacer.is_pending());
}

#[test]
fn test_queued_tasks_run_after_the_renderer() {
    struct Counter(Rc<RefCell<u32>>);
    impl Task for Counter {
        fn name(&self) -> &str {
            "counter"
        }
        fn update(&mut self, _delta: std::time::Duration) {
            *self.0.borrow_mut() += 1;
        }
    }

    let ticks = Rc::new(RefCell::new(0));
    let mut container = Container::new(ContainerConfig::default());
    container.add_task(Box::new(Counter(Rc::clone(&ticks))));
    let (ports, host) = HostPorts::headless();
    container.start(ports).unwrap();

    host.pacer.take_request();
    container.tick();

    assert_eq!(
        container.kernel().unwrap().task_names(),
        vec!["renderer", "counter"]
    );
    assert_eq!(*ticks.borrow(), 1);
}

#[test]
fn test_restart_resumes_without_rebuilding() {
    let mut container = Container::new(ContainerConfig::default());
    let (ports, host) = HostPorts::headless();
    container.start(ports).unwrap();
    container.shutdown().unwrap();

    let (unused, _) = HostPorts::headless();
    container.start(unused).unwrap();

    assert!(container.is_running());
    assert_eq!(host.pacer.request_count(), 1, "the pending frame carries the chain");
    assert!(host.pacer.take_request());
    container.tick();
    assert!(host.pacer.is_pending());
}
