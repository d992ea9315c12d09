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

//! A right-biased sum type of two alternatives.

/// One of two typed outcomes.
///
/// The convenience combinators (`map`, `flat_map`, `get_or_else`, ...) operate
/// on the [`Either::Right`] side, which by convention holds the "success" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The secondary alternative (usually an error or a diagnostic).
    Left(L),
    /// The primary alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a [`Either::Left`].
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a [`Either::Right`].
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the left value, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Same as [`Either::right`].
    pub fn to_option(self) -> Option<R> {
        self.right()
    }

    /// Returns the right value or evaluates `other` to build one.
    pub fn get_or_else(self, other: impl FnOnce() -> R) -> R {
        match self {
            Either::Left(_) => other(),
            Either::Right(r) => r,
        }
    }

    /// Collapses both sides into a single value.
    pub fn fold<U>(self, l: impl FnOnce(L) -> U, r: impl FnOnce(R) -> U) -> U {
        match self {
            Either::Left(v) => l(v),
            Either::Right(v) => r(v),
        }
    }

    /// Runs `f` on the right value, if present.
    pub fn for_each(self, f: impl FnOnce(R)) {
        if let Either::Right(r) = self {
            f(r);
        }
    }

    /// Demotes a right value that fails `predicate` to a left built by `zero`.
    pub fn filter_or_else(self, predicate: impl FnOnce(&R) -> bool, zero: impl FnOnce() -> L) -> Self {
        match self {
            Either::Right(r) if !predicate(&r) => Either::Left(zero()),
            other => other,
        }
    }

    /// Chains a computation on the right value.
    pub fn flat_map<U>(self, f: impl FnOnce(R) -> Either<L, U>) -> Either<L, U> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Transforms the right value.
    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Either<L, U> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transforms the left value.
    pub fn map_left<U>(self, f: impl FnOnce(L) -> U) -> Either<U, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Exchanges the two sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}
