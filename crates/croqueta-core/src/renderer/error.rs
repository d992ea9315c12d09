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

//! Defines the error type of the shader lifecycle.

use crate::renderer::ShaderStage;
use std::fmt;

/// An error related to the acquisition, compilation or linking of GPU shaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The surface refused to allocate a shader object.
    ShaderAllocation {
        /// The stage that was requested.
        stage: ShaderStage,
    },
    /// The surface refused to allocate a program object.
    ProgramAllocation,
    /// A single stage failed to compile.
    Compilation {
        /// The failing stage.
        stage: ShaderStage,
        /// Diagnostics reported by the compiler.
        log: String,
    },
    /// At least one stage of a vertex/fragment pair failed to compile.
    /// Both stages are always compiled so both outcomes are reported.
    Stages {
        /// Diagnostics of the vertex stage, `None` if it compiled.
        vertex: Option<String>,
        /// Diagnostics of the fragment stage, `None` if it compiled.
        fragment: Option<String>,
    },
    /// The program failed to link.
    Link {
        /// Diagnostics reported by the linker.
        log: String,
    },
    /// A handle was requested from an object that was released or never built.
    Invalid {
        /// What kind of object was accessed (`"shader"` or `"program"`).
        kind: &'static str,
    },
}

impl ShaderError {
    /// Returns the failing stage when the error is tied to exactly one.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderError::ShaderAllocation { stage } | ShaderError::Compilation { stage, .. } => {
                Some(*stage)
            }
            ShaderError::Stages {
                vertex: Some(_),
                fragment: None,
            } => Some(ShaderStage::Vertex),
            ShaderError::Stages {
                vertex: None,
                fragment: Some(_),
            } => Some(ShaderStage::Fragment),
            _ => None,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::ShaderAllocation { .. } => write!(f, "Error requesting a new shader"),
            ShaderError::ProgramAllocation => write!(f, "Error requesting a new program"),
            ShaderError::Compilation { log, .. } => write!(f, "{log}"),
            ShaderError::Stages { vertex, fragment } => {
                writeln!(f, "Error on shader compilation:")?;
                writeln!(
                    f,
                    "  {}: {}",
                    ShaderStage::Vertex,
                    vertex.as_deref().unwrap_or("Success")
                )?;
                write!(
                    f,
                    "  {}: {}",
                    ShaderStage::Fragment,
                    fragment.as_deref().unwrap_or("Success")
                )
            }
            ShaderError::Link { log } => write!(f, "{log}"),
            ShaderError::Invalid { kind } => write!(f, "Invalid {kind}"),
        }
    }
}

impl std::error::Error for ShaderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_and_invalid_messages() {
        let err = ShaderError::ShaderAllocation {
            stage: ShaderStage::Vertex,
        };
        assert_eq!(format!("{err}"), "Error requesting a new shader");
        assert_eq!(
            format!("{}", ShaderError::Invalid { kind: "shader" }),
            "Invalid shader"
        );
        assert_eq!(
            format!("{}", ShaderError::Invalid { kind: "program" }),
            "Invalid program"
        );
    }

    #[test]
    fn compilation_message_is_the_compiler_log() {
        let err = ShaderError::Compilation {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".to_string(),
        };
        assert_eq!(format!("{err}"), "0:3: syntax error");
        assert_eq!(err.stage(), Some(ShaderStage::Fragment));
    }

    #[test]
    fn stages_message_locates_the_failing_stage() {
        let err = ShaderError::Stages {
            vertex: None,
            fragment: Some("0:1: 'gl_FragColour' undeclared".to_string()),
        };
        let text = format!("{err}");
        assert!(text.contains("Vertex shader: Success"));
        assert!(text.contains("Fragment shader: 0:1: 'gl_FragColour' undeclared"));
        assert_eq!(err.stage(), Some(ShaderStage::Fragment));

        let both = ShaderError::Stages {
            vertex: Some("v".into()),
            fragment: Some("f".into()),
        };
        assert_eq!(both.stage(), None);
    }
}
