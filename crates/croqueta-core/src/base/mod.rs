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

//! Base vocabulary used across the crate.
//!
//! * [`option`]: extensions for `Option<T>` (presence or absence).
//! * [`fallible`]: the `Try<T>` alias and its combinators (value or failure).
//! * [`either`]: a right-biased `Either<L, R>`.
//! * [`context`]: the hierarchical application context handed to tasks.
//! * [`assert`]: fatal invariant checks.

pub mod assert;
pub mod context;
pub mod either;
pub mod fallible;
pub mod option;

pub use self::assert::assert_invariant;
pub use self::context::Context;
pub use self::either::Either;
pub use self::fallible::{Try, TryExt};
pub use self::option::OptionExt;
