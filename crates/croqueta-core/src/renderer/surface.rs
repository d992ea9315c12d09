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

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// The programmable stage a shader object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Per-vertex stage.
    Vertex,
    /// Per-fragment stage.
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "Vertex shader"),
            ShaderStage::Fragment => write!(f, "Fragment shader"),
        }
    }
}

/// An opaque handle representing a native shader object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderId(pub usize);

/// An opaque handle representing a native program object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramId(pub usize);

/// An RGBA colour used to clear the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red channel, `0.0..=1.0`.
    pub r: f32,
    /// Green channel, `0.0..=1.0`.
    pub g: f32,
    /// Blue channel, `0.0..=1.0`.
    pub b: f32,
    /// Alpha channel, `0.0..=1.0`.
    pub a: f32,
}

impl ClearColor {
    /// Creates a colour from its four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::new(0.2, 0.5, 1.0, 1.0)
    }
}

/// The host drawing surface, modelled after a GL-style immediate API.
///
/// Creation calls return `None` when the surface refuses to allocate; every
/// other call on an unknown or deleted handle is ignored by implementations.
/// Calls are made from the single frame thread, hence `&self` everywhere and
/// no `Send`/`Sync` bound.
pub trait RenderSurface: Debug {
    /// Allocates a shader object for `stage`.
    fn create_shader(&self, stage: ShaderStage) -> Option<ShaderId>;

    /// Replaces the source code of `shader`.
    fn shader_source(&self, shader: ShaderId, source: &str);

    /// Compiles the current source of `shader`.
    fn compile_shader(&self, shader: ShaderId);

    /// Whether the last compilation of `shader` succeeded.
    fn shader_compile_status(&self, shader: ShaderId) -> bool;

    /// The compiler diagnostics for `shader`, if the surface provides any.
    fn shader_info_log(&self, shader: ShaderId) -> Option<String>;

    /// Frees `shader`. Legal while the shader is attached to a program.
    fn delete_shader(&self, shader: ShaderId);

    /// Allocates a program object.
    fn create_program(&self) -> Option<ProgramId>;

    /// Attaches a compiled shader to `program`.
    fn attach_shader(&self, program: ProgramId, shader: ShaderId);

    /// Links the shaders attached to `program`.
    fn link_program(&self, program: ProgramId);

    /// Whether the last link of `program` succeeded.
    fn program_link_status(&self, program: ProgramId) -> bool;

    /// The linker diagnostics for `program`, if the surface provides any.
    fn program_info_log(&self, program: ProgramId) -> Option<String>;

    /// Frees `program`.
    fn delete_program(&self, program: ProgramId);

    /// Sets the colour used by [`RenderSurface::clear`].
    fn set_clear_color(&self, color: ClearColor);

    /// Clears the colour buffer.
    fn clear(&self);

    /// Pushes pending commands to the device.
    fn flush(&self);
}
