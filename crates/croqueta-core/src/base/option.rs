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

//! Extensions for `Option<T>`.
//!
//! `map`, `and_then`, `filter` and the lazy `unwrap_or_else` already come from
//! the standard library; this trait only adds the operations the rest of the
//! crate needs on top of them.

use crate::base::either::Either;
use crate::error::CroquetaError;

/// Extra combinators for [`Option`].
pub trait OptionExt<T> {
    /// Returns the contained value, or [`CroquetaError::NoSuchElement`] when empty.
    fn get(self) -> Result<T, CroquetaError>;

    /// Collapses both arms into a single value. `if_empty` is only evaluated
    /// when the option is empty.
    fn fold<U>(self, if_empty: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U;

    /// Lifts the option into an [`Either`], building the left side lazily.
    fn into_either<L>(self, left: impl FnOnce() -> L) -> Either<L, T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn get(self) -> Result<T, CroquetaError> {
        self.ok_or(CroquetaError::NoSuchElement)
    }

    fn fold<U>(self, if_empty: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Some(value) => f(value),
            None => if_empty(),
        }
    }

    fn into_either<L>(self, left: impl FnOnce() -> L) -> Either<L, T> {
        self.fold(|| Either::Left(left()), Either::Right)
    }
}
