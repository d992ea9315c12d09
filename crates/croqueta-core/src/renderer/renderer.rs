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

use super::{ClearColor, RenderSurface, RendererConfig, Shader};
use crate::{Context, CroquetaError, Task};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// The per-frame rendering task: clears the surface and flushes it.
pub struct Renderer {
    surface: Rc<dyn RenderSurface>,
    context: Rc<Context>,
    clear_color: ClearColor,
    shader: Option<Shader>,
}

impl Renderer {
    /// The name under which the renderer is registered in the kernel.
    pub const NAME: &'static str = "renderer";

    /// Creates the renderer and builds the configured shader, if any.
    ///
    /// ## Errors
    /// * [`CroquetaError::MissingParameter`] if a shader stage is missing.
    /// * [`CroquetaError::Shader`] if the shader fails to compile or link.
    pub fn new(
        surface: Rc<dyn RenderSurface>,
        context: Rc<Context>,
        config: &RendererConfig,
    ) -> Result<Self, CroquetaError> {
        surface.set_clear_color(config.clear_color);

        let shader = match &config.shaders {
            Some(sources) => {
                let (vertex, fragment) = sources.pair()?;
                Some(Shader::new(&surface, vertex, fragment)?)
            }
            None => None,
        };

        log::info!(
            "Renderer created (clear colour: {:?}, shader: {}).",
            config.clear_color,
            if shader.is_some() { "yes" } else { "none" }
        );

        Ok(Self {
            surface,
            context,
            clear_color: config.clear_color,
            shader,
        })
    }

    /// The colour the surface is cleared to.
    pub fn clear_color(&self) -> ClearColor {
        self.clear_color
    }

    /// The shader built at construction, if one was configured.
    pub fn shader(&self) -> Option<&Shader> {
        self.shader.as_ref()
    }

    /// The context the renderer was created in.
    pub fn context(&self) -> &Rc<Context> {
        &self.context
    }
}

impl Task for Renderer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn update(&mut self, _delta: Duration) {
        self.surface.clear();
        self.surface.flush();
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("clear_color", &self.clear_color)
            .field("shader", &self.shader)
            .finish_non_exhaustive()
    }
}
