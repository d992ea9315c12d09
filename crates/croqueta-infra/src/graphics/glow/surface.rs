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

use ::glow::HasContext;
use croqueta_core::renderer::{ClearColor, ProgramId, RenderSurface, ShaderId, ShaderStage};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;

type NativeShader = <::glow::Context as HasContext>::Shader;
type NativeProgram = <::glow::Context as HasContext>::Program;

/// A [`RenderSurface`] over a `glow` OpenGL context.
///
/// Native objects never leave this type: callers get opaque [`ShaderId`] and
/// [`ProgramId`] handles that map to the `glow` objects internally. Calls on
/// an unknown handle are logged and ignored.
pub struct GlowSurface {
    gl: ::glow::Context,
    shaders: RefCell<HashMap<ShaderId, NativeShader>>,
    programs: RefCell<HashMap<ProgramId, NativeProgram>>,
    next_shader_id: Cell<usize>,
    next_program_id: Cell<usize>,
}

impl GlowSurface {
    /// Wraps a current GL context.
    ///
    /// The context must stay current on the calling thread for as long as the
    /// surface is used.
    pub fn new(gl: ::glow::Context) -> Self {
        log::info!("GlowSurface: created over {:?}.", gl.version());
        Self {
            gl,
            shaders: RefCell::new(HashMap::new()),
            programs: RefCell::new(HashMap::new()),
            next_shader_id: Cell::new(0),
            next_program_id: Cell::new(0),
        }
    }

    /// The wrapped `glow` context.
    pub fn gl(&self) -> &::glow::Context {
        &self.gl
    }

    /// Number of shader objects currently alive.
    pub fn live_shaders(&self) -> usize {
        self.shaders.borrow().len()
    }

    /// Number of program objects currently alive.
    pub fn live_programs(&self) -> usize {
        self.programs.borrow().len()
    }

    // --- ID Generation Helpers ---

    fn generate_shader_id(&self) -> ShaderId {
        let id = self.next_shader_id.get();
        self.next_shader_id.set(id + 1);
        ShaderId(id)
    }

    fn generate_program_id(&self) -> ProgramId {
        let id = self.next_program_id.get();
        self.next_program_id.set(id + 1);
        ProgramId(id)
    }

    fn native_shader(&self, id: ShaderId) -> Option<NativeShader> {
        let native = self.shaders.borrow().get(&id).copied();
        if native.is_none() {
            log::warn!("GlowSurface: unknown shader {id:?}.");
        }
        native
    }

    fn native_program(&self, id: ProgramId) -> Option<NativeProgram> {
        let native = self.programs.borrow().get(&id).copied();
        if native.is_none() {
            log::warn!("GlowSurface: unknown program {id:?}.");
        }
        native
    }
}

fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => ::glow::VERTEX_SHADER,
        ShaderStage::Fragment => ::glow::FRAGMENT_SHADER,
    }
}

// SAFETY (all blocks below): every native object passed to `glow` was created
// by `self.gl` and is still present in the id maps.
impl RenderSurface for GlowSurface {
    fn create_shader(&self, stage: ShaderStage) -> Option<ShaderId> {
        match unsafe { self.gl.create_shader(gl_stage(stage)) } {
            Ok(native) => {
                let id = self.generate_shader_id();
                self.shaders.borrow_mut().insert(id, native);
                log::debug!("GlowSurface: created {stage} with ID {id:?}.");
                Some(id)
            }
            Err(e) => {
                log::error!("GlowSurface: failed to create {stage}: {e}");
                None
            }
        }
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        if let Some(native) = self.native_shader(shader) {
            unsafe { self.gl.shader_source(native, source) };
        }
    }

    fn compile_shader(&self, shader: ShaderId) {
        if let Some(native) = self.native_shader(shader) {
            unsafe { self.gl.compile_shader(native) };
        }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        self.native_shader(shader)
            .is_some_and(|native| unsafe { self.gl.get_shader_compile_status(native) })
    }

    fn shader_info_log(&self, shader: ShaderId) -> Option<String> {
        self.native_shader(shader)
            .map(|native| unsafe { self.gl.get_shader_info_log(native) })
    }

    fn delete_shader(&self, shader: ShaderId) {
        if let Some(native) = self.shaders.borrow_mut().remove(&shader) {
            unsafe { self.gl.delete_shader(native) };
            log::debug!("GlowSurface: deleted shader {shader:?}.");
        }
    }

    fn create_program(&self) -> Option<ProgramId> {
        match unsafe { self.gl.create_program() } {
            Ok(native) => {
                let id = self.generate_program_id();
                self.programs.borrow_mut().insert(id, native);
                log::debug!("GlowSurface: created program with ID {id:?}.");
                Some(id)
            }
            Err(e) => {
                log::error!("GlowSurface: failed to create program: {e}");
                None
            }
        }
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        if let (Some(p), Some(s)) = (self.native_program(program), self.native_shader(shader)) {
            unsafe { self.gl.attach_shader(p, s) };
        }
    }

    fn link_program(&self, program: ProgramId) {
        if let Some(native) = self.native_program(program) {
            unsafe { self.gl.link_program(native) };
        }
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        self.native_program(program)
            .is_some_and(|native| unsafe { self.gl.get_program_link_status(native) })
    }

    fn program_info_log(&self, program: ProgramId) -> Option<String> {
        self.native_program(program)
            .map(|native| unsafe { self.gl.get_program_info_log(native) })
    }

    fn delete_program(&self, program: ProgramId) {
        if let Some(native) = self.programs.borrow_mut().remove(&program) {
            unsafe { self.gl.delete_program(native) };
            log::debug!("GlowSurface: deleted program {program:?}.");
        }
    }

    fn set_clear_color(&self, color: ClearColor) {
        unsafe { self.gl.clear_color(color.r, color.g, color.b, color.a) };
    }

    fn clear(&self) {
        unsafe { self.gl.clear(::glow::COLOR_BUFFER_BIT) };
    }

    fn flush(&self) {
        unsafe { self.gl.flush() };
    }
}

impl Drop for GlowSurface {
    fn drop(&mut self) {
        let programs = self.programs.get_mut().len();
        let shaders = self.shaders.get_mut().len();
        if programs + shaders > 0 {
            log::warn!(
                "GlowSurface dropped with {programs} program(s) and {shaders} shader(s) still alive."
            );
        }
    }
}

impl fmt::Debug for GlowSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlowSurface")
            .field("live_shaders", &self.live_shaders())
            .field("live_programs", &self.live_programs())
            .finish_non_exhaustive()
    }
}
