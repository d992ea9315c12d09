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

use super::ClearColor;
use crate::CroquetaError;
use serde::{Deserialize, Serialize};

/// Source code for a vertex/fragment pair.
///
/// Both stages are optional at the deserialization level so that a missing one
/// is reported as [`CroquetaError::MissingParameter`] rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderSources {
    /// Vertex stage source.
    pub vertex: Option<String>,
    /// Fragment stage source.
    pub fragment: Option<String>,
}

impl ShaderSources {
    /// Creates a complete pair.
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: Some(vertex.into()),
            fragment: Some(fragment.into()),
        }
    }

    /// Borrows both sources.
    ///
    /// ## Returns
    /// `(vertex, fragment)`, or [`CroquetaError::MissingParameter`] naming the
    /// first absent stage.
    pub fn pair(&self) -> Result<(&str, &str), CroquetaError> {
        let vertex = self
            .vertex
            .as_deref()
            .ok_or_else(|| CroquetaError::MissingParameter("shaders.vertex".into()))?;
        let fragment = self
            .fragment
            .as_deref()
            .ok_or_else(|| CroquetaError::MissingParameter("shaders.fragment".into()))?;
        Ok((vertex, fragment))
    }
}

/// Settings of the renderer task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Colour the surface is cleared to every frame.
    pub clear_color: ClearColor,
    /// Shader built when the renderer starts, if any.
    pub shaders: Option<ShaderSources>,
}

impl RendererConfig {
    /// Checks that a configured shader names both of its stages.
    pub fn validate(&self) -> Result<(), CroquetaError> {
        if let Some(shaders) = &self.shaders {
            shaders.pair()?;
        }
        Ok(())
    }
}
