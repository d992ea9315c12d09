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

//! Shader and program objects.
//!
//! Every object keeps its native handle in an `Option`: it is `Some` only while
//! the object is usable, and taking it out on release guarantees the handle is
//! deleted exactly once. Failed constructions delete whatever they allocated
//! before returning the error.

use super::{ProgramId, RenderSurface, ShaderError, ShaderId, ShaderStage};
use crate::base::assert_invariant;
use std::fmt;
use std::rc::Rc;

const UNKNOWN_COMPILE_ERROR: &str = "Unknown error on shader compilation";
const UNKNOWN_LINK_ERROR: &str = "Unknown error on program linking";

/// Treats an empty diagnostic as no diagnostic at all.
fn non_empty(log: Option<String>) -> Option<String> {
    log.filter(|l| !l.trim().is_empty())
}

/// A single compiled stage.
pub struct CompiledShader {
    surface: Rc<dyn RenderSurface>,
    stage: ShaderStage,
    handle: Option<ShaderId>,
}

impl CompiledShader {
    /// Allocates a shader object on `surface`, uploads `source` and compiles it.
    ///
    /// ## Errors
    /// * [`ShaderError::ShaderAllocation`] if the surface refuses the allocation.
    /// * [`ShaderError::Compilation`] with the compiler log if compilation fails;
    ///   the native object is deleted first.
    pub fn new(
        surface: &Rc<dyn RenderSurface>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, ShaderError> {
        let handle = surface.create_shader(stage).ok_or_else(|| {
            log::error!("Surface refused to allocate a {stage} object.");
            ShaderError::ShaderAllocation { stage }
        })?;

        surface.shader_source(handle, source);
        surface.compile_shader(handle);

        if !surface.shader_compile_status(handle) {
            let log = non_empty(surface.shader_info_log(handle))
                .unwrap_or_else(|| UNKNOWN_COMPILE_ERROR.to_string());
            surface.delete_shader(handle);
            log::error!("{stage} failed to compile: {log}");
            return Err(ShaderError::Compilation { stage, log });
        }

        log::debug!("{stage} compiled ({handle:?}).");
        Ok(Self {
            surface: Rc::clone(surface),
            stage,
            handle: Some(handle),
        })
    }

    /// The stage this shader was compiled for.
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// The native handle, or [`ShaderError::Invalid`] once released.
    pub fn handle(&self) -> Result<ShaderId, ShaderError> {
        self.handle.ok_or(ShaderError::Invalid { kind: "shader" })
    }

    /// Returns `true` until the shader is released.
    pub fn is_valid(&self) -> bool {
        self.handle.is_some()
    }

    /// Deletes the native object. Further calls do nothing.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            log::trace!("Deleting {} {handle:?}.", self.stage);
            self.surface.delete_shader(handle);
        }
    }
}

impl Drop for CompiledShader {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for CompiledShader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledShader")
            .field("stage", &self.stage)
            .field("handle", &self.handle)
            .finish()
    }
}

/// A linked program built from a vertex and a fragment stage.
pub struct ShaderProgram {
    surface: Rc<dyn RenderSurface>,
    handle: Option<ProgramId>,
}

impl ShaderProgram {
    /// Allocates a program, attaches both stages and links it.
    ///
    /// ## Errors
    /// * [`ShaderError::Invalid`] if either stage was already released.
    /// * [`ShaderError::ProgramAllocation`] if the surface refuses the allocation.
    /// * [`ShaderError::Link`] with the linker log if linking fails; the native
    ///   program is deleted first.
    ///
    /// ## Panics
    /// If the stages are passed in the wrong slots.
    pub fn link(
        surface: &Rc<dyn RenderSurface>,
        vertex: &CompiledShader,
        fragment: &CompiledShader,
    ) -> Result<Self, ShaderError> {
        assert_invariant(
            vertex.stage() == ShaderStage::Vertex && fragment.stage() == ShaderStage::Fragment,
            "program stages must be (vertex, fragment)",
        );
        let vertex = vertex.handle()?;
        let fragment = fragment.handle()?;

        let handle = surface.create_program().ok_or_else(|| {
            log::error!("Surface refused to allocate a program object.");
            ShaderError::ProgramAllocation
        })?;

        surface.attach_shader(handle, vertex);
        surface.attach_shader(handle, fragment);
        surface.link_program(handle);

        if !surface.program_link_status(handle) {
            let log = non_empty(surface.program_info_log(handle))
                .unwrap_or_else(|| UNKNOWN_LINK_ERROR.to_string());
            surface.delete_program(handle);
            log::error!("Program failed to link: {log}");
            return Err(ShaderError::Link { log });
        }

        log::debug!("Program linked ({handle:?}).");
        Ok(Self {
            surface: Rc::clone(surface),
            handle: Some(handle),
        })
    }

    /// The native handle, or [`ShaderError::Invalid`] once released.
    pub fn handle(&self) -> Result<ProgramId, ShaderError> {
        self.handle.ok_or(ShaderError::Invalid { kind: "program" })
    }

    /// Returns `true` until the program is released.
    pub fn is_valid(&self) -> bool {
        self.handle.is_some()
    }

    /// Deletes the native object. Further calls do nothing.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            log::trace!("Deleting program {handle:?}.");
            self.surface.delete_program(handle);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("handle", &self.handle)
            .finish()
    }
}

/// A complete vertex + fragment + program triple.
///
/// Construction is all-or-nothing: on any failure every object already built
/// is deleted before the error reaches the caller.
// Field order matters: on drop the program goes before its stages.
#[derive(Debug)]
pub struct Shader {
    program: ShaderProgram,
    vertex: CompiledShader,
    fragment: CompiledShader,
}

impl Shader {
    /// Compiles both stages and links them.
    ///
    /// Both stages are always compiled, so a failure reports the outcome of
    /// each ([`ShaderError::Stages`]). A refused allocation is returned as is.
    pub fn new(
        surface: &Rc<dyn RenderSurface>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = CompiledShader::new(surface, ShaderStage::Vertex, vertex_source);
        let fragment = CompiledShader::new(surface, ShaderStage::Fragment, fragment_source);

        match (vertex, fragment) {
            (Ok(vertex), Ok(fragment)) => {
                let program = ShaderProgram::link(surface, &vertex, &fragment)?;
                log::info!("Shader program ready.");
                Ok(Self {
                    program,
                    vertex,
                    fragment,
                })
            }
            (vertex, fragment) => {
                // Any stage that did compile is dropped, and deleted, right here.
                let vertex = vertex.err();
                let fragment = fragment.err();

                let refused = [&vertex, &fragment]
                    .into_iter()
                    .flatten()
                    .find(|e| matches!(e, ShaderError::ShaderAllocation { .. }));
                if let Some(err) = refused {
                    return Err(err.clone());
                }

                Err(ShaderError::Stages {
                    vertex: vertex.map(|e| e.to_string()),
                    fragment: fragment.map(|e| e.to_string()),
                })
            }
        }
    }

    /// The linked program, or [`ShaderError::Invalid`] once released.
    pub fn program(&self) -> Result<ProgramId, ShaderError> {
        self.program.handle()
    }

    /// The vertex stage.
    pub fn vertex(&self) -> &CompiledShader {
        &self.vertex
    }

    /// The fragment stage.
    pub fn fragment(&self) -> &CompiledShader {
        &self.fragment
    }

    /// Returns `true` until the shader is released.
    pub fn is_valid(&self) -> bool {
        self.program.is_valid()
    }

    /// Deletes the program, then both stages. Further calls do nothing.
    pub fn release(&mut self) {
        if self.is_valid() {
            log::debug!("Releasing shader program.");
        }
        self.program.release();
        self.vertex.release();
        self.fragment.release();
    }
}
