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

//! Rendering contracts and the GPU resource lifecycle.
//!
//! The [`RenderSurface`] trait is the port to the host's drawing surface;
//! `croqueta-infra` provides the concrete backends. On top of it, [`Shader`]
//! builds a vertex stage, a fragment stage and the program linking them,
//! surfacing every failure as a [`ShaderError`] and never leaking a
//! half-built native object.

pub mod config;
pub mod error;
#[allow(clippy::module_inception)]
pub mod renderer;
pub mod shader;
pub mod surface;

pub use self::config::{RendererConfig, ShaderSources};
pub use self::error::ShaderError;
pub use self::renderer::Renderer;
pub use self::shader::{CompiledShader, Shader, ShaderProgram};
pub use self::surface::{ClearColor, ProgramId, RenderSurface, ShaderId, ShaderStage};
