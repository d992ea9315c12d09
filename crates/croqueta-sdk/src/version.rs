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

//! Release identification.

/// Major version number.
pub const VERSION_MAJOR: u32 = 0;
/// Minor version number.
pub const VERSION_MINOR: u32 = 0;
/// Revision number.
pub const VERSION_REV: u32 = 1;
/// Whether this is a development build.
pub const VERSION_DEV: bool = true;

/// The version string, e.g. `0.0.1-dev`.
pub fn version() -> String {
    format!(
        "{VERSION_MAJOR}.{VERSION_MINOR}.{VERSION_REV}{}",
        if VERSION_DEV { "-dev" } else { "" }
    )
}
