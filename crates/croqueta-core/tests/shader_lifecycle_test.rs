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

//! Integration tests for the shader/program lifecycle against a recording surface.

mod common;

use common::{as_surface, Call, RecordingSurface, BROKEN, FRAGMENT, VERTEX};
use croqueta_core::renderer::{CompiledShader, Shader, ShaderError, ShaderProgram, ShaderStage};

#[test]
fn test_valid_sources_build_a_linked_program() {
    let recording = RecordingSurface::new();
    let surface = as_surface(&recording);

    let shader = Shader::new(&surface, VERTEX, FRAGMENT).expect("shader should build");

    assert!(shader.is_valid());
    let program = shader.program().unwrap();
    let vertex = shader.vertex().handle().unwrap();
    let fragment = shader.fragment().handle().unwrap();
    let calls = recording.calls();
    assert!(calls.contains(&Call::Attach(program, vertex)));
    assert!(calls.contains(&Call::Attach(program, fragment)));
    assert!(calls.contains(&Call::Link(program)));
    assert!(recording.deleted_shaders().is_empty());
}

#[test]
fn test_invalid_fragment_reports_diagnostic_and_deletes_vertex() {
    let recording = RecordingSurface::new();
    let surface = as_surface(&recording);
    let broken = format!("{FRAGMENT}\n{BROKEN}");

    let err = Shader::new(&surface, VERTEX, &broken).unwrap_err();

    match &err {
        ShaderError::Stages { vertex, fragment } => {
            assert!(vertex.is_none(), "vertex stage compiled");
            assert!(fragment.as_deref().unwrap().contains("unexpected token"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.stage(), Some(ShaderStage::Fragment));
    assert!(err.to_string().contains("Vertex shader: Success"));

    let vertex = recording.created_shader(ShaderStage::Vertex).unwrap();
    let fragment = recording.created_shader(ShaderStage::Fragment).unwrap();
    let deleted = recording.deleted_shaders();
    assert!(deleted.contains(&vertex), "compiled vertex stage must be deleted");
    assert!(deleted.contains(&fragment), "failed fragment stage must be deleted");
    assert_eq!(recording.live_shaders(), 0);
    assert_eq!(recording.live_programs(), 0, "no program is requested");
}

#[test]
fn test_both_stages_are_compiled_even_if_the_first_fails() {
    let recording = RecordingSurface::new();
    let surface = as_surface(&recording);
    let broken = format!("{VERTEX}\n{BROKEN}");

    let err = Shader::new(&surface, &broken, &broken).unwrap_err();

    match err {
        ShaderError::Stages { vertex, fragment } => {
            assert!(vertex.is_some());
            assert!(fragment.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let compiles = recording
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::Compile(_)))
        .count();
    assert_eq!(compiles, 2);
}

#[test]
fn test_empty_compile_log_falls_back_to_generic_message() {
    let recording = RecordingSurface::new();
    recording.silent_logs.set(true);
    let surface = as_surface(&recording);

    let err = CompiledShader::new(&surface, ShaderStage::Vertex, BROKEN).unwrap_err();

    assert_eq!(err.to_string(), "Unknown error on shader compilation");
}

#[test]
fn test_refused_shader_allocation() {
    let recording = RecordingSurface::new();
    recording.refuse_shaders.set(true);
    let surface = as_surface(&recording);

    let err = Shader::new(&surface, VERTEX, FRAGMENT).unwrap_err();

    assert_eq!(
        err,
        ShaderError::ShaderAllocation {
            stage: ShaderStage::Vertex
        }
    );
    assert_eq!(err.to_string(), "Error requesting a new shader");
}

#[test]
fn test_refused_program_allocation_releases_stages() {
    let recording = RecordingSurface::new();
    recording.refuse_programs.set(true);
    let surface = as_surface(&recording);

    let err = Shader::new(&surface, VERTEX, FRAGMENT).unwrap_err();

    assert_eq!(err, ShaderError::ProgramAllocation);
    assert_eq!(recording.live_shaders(), 0);
}

#[test]
fn test_link_failure_deletes_program_and_stages() {
    let recording = RecordingSurface::new();
    recording.fail_link.set(true);
    let surface = as_surface(&recording);

    let err = Shader::new(&surface, VERTEX, FRAGMENT).unwrap_err();

    assert!(matches!(err, ShaderError::Link { ref log } if log.contains("v_uv")));
    assert_eq!(recording.live_programs(), 0);
    assert_eq!(recording.live_shaders(), 0);
}

#[test]
fn test_empty_link_log_falls_back_to_generic_message() {
    let recording = RecordingSurface::new();
    let surface = as_surface(&recording);
    let vertex = CompiledShader::new(&surface, ShaderStage::Vertex, VERTEX).unwrap();
    let fragment = CompiledShader::new(&surface, ShaderStage::Fragment, FRAGMENT).unwrap();
    recording.fail_link.set(true);
    recording.silent_logs.set(true);

    let err = ShaderProgram::link(&surface, &vertex, &fragment).unwrap_err();

    assert_eq!(err.to_string(), "Unknown error on program linking");
}

#[test]
fn test_release_is_idempotent_and_orders_program_first() {
    let recording = RecordingSurface::new();
    let surface = as_surface(&recording);
    let mut shader = Shader::new(&surface, VERTEX, FRAGMENT).unwrap();
    let program = shader.program().unwrap();

    shader.release();
    shader.release();

    assert!(!shader.is_valid());
    assert_eq!(
        shader.program().unwrap_err().to_string(),
        "Invalid program"
    );
    assert_eq!(
        shader.vertex().handle().unwrap_err().to_string(),
        "Invalid shader"
    );

    let deletions: Vec<Call> = recording
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::DeleteProgram(_) | Call::DeleteShader(_)))
        .collect();
    assert_eq!(deletions.len(), 3, "each object is deleted exactly once");
    assert_eq!(deletions[0], Call::DeleteProgram(program));

    drop(shader);
    assert_eq!(recording.deleted_programs().len(), 1);
    assert_eq!(recording.deleted_shaders().len(), 2);
}

#[test]
fn test_drop_releases_everything() {
    let recording = RecordingSurface::new();
    {
        let surface = as_surface(&recording);
        let _shader = Shader::new(&surface, VERTEX, FRAGMENT).unwrap();
        assert_eq!(recording.live_shaders(), 2);
        assert_eq!(recording.live_programs(), 1);
    }
    assert_eq!(recording.live_shaders(), 0);
    assert_eq!(recording.live_programs(), 0);
}

#[test]
fn test_linking_a_released_stage_is_invalid() {
    let recording = RecordingSurface::new();
    let surface = as_surface(&recording);
    let mut vertex = CompiledShader::new(&surface, ShaderStage::Vertex, VERTEX).unwrap();
    let fragment = CompiledShader::new(&surface, ShaderStage::Fragment, FRAGMENT).unwrap();
    vertex.release();

    let err = ShaderProgram::link(&surface, &vertex, &fragment).unwrap_err();

    assert_eq!(err, ShaderError::Invalid { kind: "shader" });
    assert_eq!(recording.live_programs(), 0);
}
