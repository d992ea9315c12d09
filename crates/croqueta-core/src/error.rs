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

//! Top-level error taxonomy shared by every subsystem.

use crate::renderer::ShaderError;
use std::fmt;

/// The errors surfaced by the core and by the bootstrap code built on it.
#[derive(Debug)]
pub enum CroquetaError {
    /// The host could not provide a compatible drawing surface.
    SurfaceUnsupported,
    /// A GPU shader or program could not be acquired, compiled or linked.
    Shader(ShaderError),
    /// An internal invariant was violated.
    AssertionFailed(String),
    /// An absent value was accessed.
    NoSuchElement,
    /// A required construction argument was absent.
    MissingParameter(String),
}

impl fmt::Display for CroquetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CroquetaError::SurfaceUnsupported => {
                write!(f, "The host cannot provide a compatible drawing surface.")
            }
            CroquetaError::Shader(err) => write!(f, "{err}"),
            CroquetaError::AssertionFailed(msg) => write!(f, "Assertion failed: '{msg}'"),
            CroquetaError::NoSuchElement => write!(f, "No such element."),
            CroquetaError::MissingParameter(name) => {
                write!(f, "Missing required parameter: {name}")
            }
        }
    }
}

impl std::error::Error for CroquetaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CroquetaError::Shader(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShaderError> for CroquetaError {
    fn from(err: ShaderError) -> Self {
        CroquetaError::Shader(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn shader_error_converts_and_chains() {
        let err: CroquetaError = ShaderError::Link {
            log: "undefined varying".to_string(),
        }
        .into();
        assert!(matches!(err, CroquetaError::Shader(_)));
        assert_eq!(format!("{err}"), "undefined varying");
        assert!(err.source().is_some());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            format!("{}", CroquetaError::AssertionFailed("x > 0".into())),
            "Assertion failed: 'x > 0'"
        );
        assert_eq!(
            format!("{}", CroquetaError::MissingParameter("fragment".into())),
            "Missing required parameter: fragment"
        );
        assert!(CroquetaError::NoSuchElement.source().is_none());
    }
}
