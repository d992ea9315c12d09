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

//! A scriptable render surface that records every call it receives.

#![allow(dead_code)]

use croqueta_core::renderer::{ClearColor, ProgramId, RenderSurface, ShaderId, ShaderStage};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Sources containing this marker fail to compile.
pub const BROKEN: &str = "#broken";

/// A call observed by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, ShaderId),
    Compile(ShaderId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    Attach(ProgramId, ShaderId),
    Link(ProgramId),
    DeleteProgram(ProgramId),
    ClearColor(ClearColor),
    Clear,
    Flush,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: RefCell<Vec<Call>>,
    pub refuse_shaders: Cell<bool>,
    pub refuse_programs: Cell<bool>,
    pub fail_link: Cell<bool>,
    pub silent_logs: Cell<bool>,
    next_id: Cell<usize>,
    sources: RefCell<HashMap<ShaderId, String>>,
    compiled: RefCell<HashMap<ShaderId, bool>>,
}

impl RecordingSurface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn next(&self) -> usize {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn deleted_shaders(&self) -> Vec<ShaderId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DeleteShader(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn deleted_programs(&self) -> Vec<ProgramId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DeleteProgram(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn created_shader(&self, stage: ShaderStage) -> Option<ShaderId> {
        self.calls.borrow().iter().find_map(|c| match c {
            Call::CreateShader(s, id) if *s == stage => Some(*id),
            _ => None,
        })
    }

    /// Shaders created and not deleted.
    pub fn live_shaders(&self) -> usize {
        let calls = self.calls.borrow();
        let created = calls
            .iter()
            .filter(|c| matches!(c, Call::CreateShader(..)))
            .count();
        let deleted = calls
            .iter()
            .filter(|c| matches!(c, Call::DeleteShader(_)))
            .count();
        created - deleted
    }

    /// Programs created and not deleted.
    pub fn live_programs(&self) -> usize {
        let calls = self.calls.borrow();
        let created = calls
            .iter()
            .filter(|c| matches!(c, Call::CreateProgram(_)))
            .count();
        let deleted = calls
            .iter()
            .filter(|c| matches!(c, Call::DeleteProgram(_)))
            .count();
        created - deleted
    }
}

impl RenderSurface for RecordingSurface {
    fn create_shader(&self, stage: ShaderStage) -> Option<ShaderId> {
        if self.refuse_shaders.get() {
            return None;
        }
        let id = ShaderId(self.next());
        self.calls.borrow_mut().push(Call::CreateShader(stage, id));
        Some(id)
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_string());
    }

    fn compile_shader(&self, shader: ShaderId) {
        self.calls.borrow_mut().push(Call::Compile(shader));
        let ok = self
            .sources
            .borrow()
            .get(&shader)
            .is_some_and(|s| !s.contains(BROKEN));
        self.compiled.borrow_mut().insert(shader, ok);
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        self.compiled.borrow().get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderId) -> Option<String> {
        if self.silent_logs.get() {
            return Some(String::new());
        }
        Some(format!("0:1({}): error: unexpected token '{BROKEN}'", shader.0))
    }

    fn delete_shader(&self, shader: ShaderId) {
        self.calls.borrow_mut().push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Option<ProgramId> {
        if self.refuse_programs.get() {
            return None;
        }
        let id = ProgramId(self.next());
        self.calls.borrow_mut().push(Call::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        self.calls.borrow_mut().push(Call::Attach(program, shader));
    }

    fn link_program(&self, program: ProgramId) {
        self.calls.borrow_mut().push(Call::Link(program));
    }

    fn program_link_status(&self, _program: ProgramId) -> bool {
        !self.fail_link.get()
    }

    fn program_info_log(&self, _program: ProgramId) -> Option<String> {
        if self.silent_logs.get() {
            return None;
        }
        Some("error: varying 'v_uv' not written by vertex shader".to_string())
    }

    fn delete_program(&self, program: ProgramId) {
        self.calls.borrow_mut().push(Call::DeleteProgram(program));
    }

    fn set_clear_color(&self, color: ClearColor) {
        self.calls.borrow_mut().push(Call::ClearColor(color));
    }

    fn clear(&self) {
        self.calls.borrow_mut().push(Call::Clear);
    }

    fn flush(&self) {
        self.calls.borrow_mut().push(Call::Flush);
    }
}

/// Upcasts the recording surface to the port the library consumes.
pub fn as_surface(surface: &Rc<RecordingSurface>) -> Rc<dyn RenderSurface> {
    Rc::clone(surface) as Rc<dyn RenderSurface>
}

pub const VERTEX: &str = "#version 300 es\nvoid main() { gl_Position = vec4(0.0); }";
pub const FRAGMENT: &str =
    "#version 300 es\nprecision mediump float;\nout vec4 c;\nvoid main() { c = vec4(1.0); }";
