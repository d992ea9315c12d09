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

//! Frame pacing for `winit` windows.

use croqueta_core::platform::FramePacer;
use std::sync::Arc;
use winit::window::{Window, WindowId};

/// A [`FramePacer`] backed by `Window::request_redraw`.
///
/// The host forwards `WindowEvent::RedrawRequested` for this window to
/// `Kernel::tick`; `winit` coalesces repeated requests into one event.
#[derive(Debug, Clone)]
pub struct WinitFramePacer {
    window: Arc<Window>,
}

impl WinitFramePacer {
    /// Paces frames on `window`.
    pub fn new(window: Arc<Window>) -> Self {
        log::info!("WinitFramePacer: pacing window {:?}.", window.id());
        Self { window }
    }

    /// The paced window's id, to match incoming redraw events against.
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }
}

impl FramePacer for WinitFramePacer {
    fn request_frame(&self) {
        self.window.request_redraw();
    }
}
