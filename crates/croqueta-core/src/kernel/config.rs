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

use crate::error::CroquetaError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings of the frame kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Number of inter-frame samples averaged into the smoothed delta.
    pub history_size: usize,
    /// Value every sample slot holds before the first real frame.
    /// Must be positive so the first smoothed delta is never zero.
    pub seed_delta: Duration,
}

impl KernelConfig {
    /// Checks that the settings can build a kernel.
    pub fn validate(&self) -> Result<(), CroquetaError> {
        if self.history_size == 0 {
            return Err(CroquetaError::MissingParameter(
                "kernel.history_size must be at least 1".to_string(),
            ));
        }
        if self.seed_delta.is_zero() {
            return Err(CroquetaError::MissingParameter(
                "kernel.seed_delta must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            history_size: 6,
            seed_delta: Duration::from_micros(1),
        }
    }
}
