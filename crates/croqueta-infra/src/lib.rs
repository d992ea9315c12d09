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

//! # Croqueta Infra
//!
//! Concrete implementations of the ports declared in `croqueta-core`:
//! render surfaces (an OpenGL backend and an in-memory one) and host frame
//! pacing for `winit` windows.

#![warn(missing_docs)]

pub mod graphics;
#[cfg(feature = "platform")]
pub mod platform;

#[cfg(feature = "graphics")]
pub use graphics::glow::GlowSurface;
pub use graphics::headless::HeadlessSurface;
#[cfg(feature = "platform")]
pub use platform::winit::WinitFramePacer;
