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

use anyhow::{Context as _, Result};
use croqueta_core::renderer::RendererConfig;
use croqueta_core::{CroquetaError, KernelConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to bootstrap a [`Container`](crate::Container).
///
/// Every field has a default, so `{}` is a valid configuration.
///
/// ```json
/// {
///   "kernel": { "history_size": 6 },
///   "renderer": {
///     "clear_color": { "r": 0.2, "g": 0.5, "b": 1.0, "a": 1.0 },
///     "shaders": { "vertex": "...", "fragment": "..." }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Frame scheduler settings.
    pub kernel: KernelConfig,
    /// Renderer task settings.
    pub renderer: RendererConfig,
}

impl ContainerConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse container configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file '{}'", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid configuration file '{}'", path.display()))?;
        log::info!("Configuration loaded from '{}'.", path.display());
        Ok(config)
    }

    /// Checks both sections.
    pub fn validate(&self) -> Result<(), CroquetaError> {
        self.kernel.validate()?;
        self.renderer.validate()
    }
}
