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

use croqueta_core::renderer::{ClearColor, ProgramId, RenderSurface, ShaderId, ShaderStage};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

const MISSING_MAIN_LOG: &str = "ERROR: 0:1: 'main' : entry point not declared";
const INCOMPLETE_PROGRAM_LOG: &str =
    "ERROR: program needs exactly one compiled vertex and one compiled fragment shader";

#[derive(Debug)]
struct HeadlessShader {
    stage: ShaderStage,
    source: String,
    compiled: bool,
}

#[derive(Debug, Default)]
struct HeadlessProgram {
    attached: Vec<(ShaderStage, bool)>,
    linked: bool,
}

/// A [`RenderSurface`] that keeps everything in memory.
///
/// It follows a small set of rules instead of a real compiler:
/// * a stage compiles when its source declares a `main` function;
/// * a program links when exactly one compiled vertex stage and one compiled
///   fragment stage are attached.
///
/// Allocation refusal can be switched on to exercise error paths, and the
/// surface counts live objects, clears and flushes for assertions.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    shaders: RefCell<HashMap<ShaderId, HeadlessShader>>,
    programs: RefCell<HashMap<ProgramId, HeadlessProgram>>,
    next_id: Cell<usize>,
    refuse_allocations: Cell<bool>,
    clear_color: Cell<ClearColor>,
    clears: Cell<u64>,
    flushes: Cell<u64>,
}

impl HeadlessSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        log::info!("HeadlessSurface: created.");
        Self::default()
    }

    /// When `true`, every `create_*` call returns `None`.
    pub fn set_refuse_allocations(&self, refuse: bool) {
        self.refuse_allocations.set(refuse);
    }

    /// Number of shader objects currently alive.
    pub fn live_shaders(&self) -> usize {
        self.shaders.borrow().len()
    }

    /// Number of program objects currently alive.
    pub fn live_programs(&self) -> usize {
        self.programs.borrow().len()
    }

    /// Number of `clear` calls so far.
    pub fn clear_count(&self) -> u64 {
        self.clears.get()
    }

    /// Number of `flush` calls so far.
    pub fn flush_count(&self) -> u64 {
        self.flushes.get()
    }

    /// The colour set by the last `set_clear_color`.
    pub fn clear_color(&self) -> ClearColor {
        self.clear_color.get()
    }

    fn allocate(&self) -> Option<usize> {
        if self.refuse_allocations.get() {
            log::warn!("HeadlessSurface: allocation refused.");
            return None;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Some(id)
    }
}

fn declares_main(source: &str) -> bool {
    let tokens: Vec<&str> = source
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .collect();
    tokens.windows(2).any(|w| w == ["void", "main"])
}

impl RenderSurface for HeadlessSurface {
    fn create_shader(&self, stage: ShaderStage) -> Option<ShaderId> {
        let id = ShaderId(self.allocate()?);
        self.shaders.borrow_mut().insert(
            id,
            HeadlessShader {
                stage,
                source: String::new(),
                compiled: false,
            },
        );
        Some(id)
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        if let Some(entry) = self.shaders.borrow_mut().get_mut(&shader) {
            entry.source = source.to_string();
            entry.compiled = false;
        }
    }

    fn compile_shader(&self, shader: ShaderId) {
        if let Some(entry) = self.shaders.borrow_mut().get_mut(&shader) {
            entry.compiled = declares_main(&entry.source);
            log::trace!(
                "HeadlessSurface: compiled {} {shader:?} (ok: {}).",
                entry.stage,
                entry.compiled
            );
        }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        self.shaders
            .borrow()
            .get(&shader)
            .is_some_and(|entry| entry.compiled)
    }

    fn shader_info_log(&self, shader: ShaderId) -> Option<String> {
        let shaders = self.shaders.borrow();
        let entry = shaders.get(&shader)?;
        Some(if entry.compiled {
            String::new()
        } else {
            MISSING_MAIN_LOG.to_string()
        })
    }

    fn delete_shader(&self, shader: ShaderId) {
        self.shaders.borrow_mut().remove(&shader);
    }

    fn create_program(&self) -> Option<ProgramId> {
        let id = ProgramId(self.allocate()?);
        self.programs
            .borrow_mut()
            .insert(id, HeadlessProgram::default());
        Some(id)
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        let shaders = self.shaders.borrow();
        let mut programs = self.programs.borrow_mut();
        if let (Some(p), Some(s)) = (programs.get_mut(&program), shaders.get(&shader)) {
            p.attached.push((s.stage, s.compiled));
        }
    }

    fn link_program(&self, program: ProgramId) {
        if let Some(p) = self.programs.borrow_mut().get_mut(&program) {
            let compiled = |stage: ShaderStage| {
                p.attached
                    .iter()
                    .filter(|(s, ok)| *s == stage && *ok)
                    .count()
            };
            let linked = p.attached.len() == 2
                && compiled(ShaderStage::Vertex) == 1
                && compiled(ShaderStage::Fragment) == 1;
            p.linked = linked;
        }
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        self.programs
            .borrow()
            .get(&program)
            .is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: ProgramId) -> Option<String> {
        let programs = self.programs.borrow();
        let entry = programs.get(&program)?;
        Some(if entry.linked {
            String::new()
        } else {
            INCOMPLETE_PROGRAM_LOG.to_string()
        })
    }

    fn delete_program(&self, program: ProgramId) {
        self.programs.borrow_mut().remove(&program);
    }

    fn set_clear_color(&self, color: ClearColor) {
        self.clear_color.set(color);
    }

    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
    }

    fn flush(&self) {
        self.flushes.set(self.flushes.get() + 1);
    }
}
