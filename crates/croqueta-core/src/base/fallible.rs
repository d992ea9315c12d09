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

//! "Value or failure" results and their recovery combinators.

/// The outcome of a fallible computation. The failure side is always a
/// well-formed [`anyhow::Error`].
pub type Try<T> = anyhow::Result<T>;

/// Recovery and transformation combinators for [`Try`].
pub trait TryExt<T> {
    /// Turns a failure into a success by applying `f` to the error.
    /// A success is returned unchanged.
    fn recover(self, f: impl FnOnce(&anyhow::Error) -> T) -> Try<T>;

    /// Like [`TryExt::recover`], but `f` may itself fail.
    fn recover_with(self, f: impl FnOnce(anyhow::Error) -> Try<T>) -> Try<T>;

    /// Unifies both arms into a new result.
    fn transform<U>(
        self,
        on_success: impl FnOnce(T) -> Try<U>,
        on_failure: impl FnOnce(anyhow::Error) -> Try<U>,
    ) -> Try<U>;

    /// Turns a success that fails `predicate` into a failure built by `error`.
    fn filter(self, predicate: impl FnOnce(&T) -> bool, error: impl FnOnce() -> anyhow::Error) -> Try<T>;

    /// Collapses both arms into a plain value.
    fn fold<U>(self, on_failure: impl FnOnce(anyhow::Error) -> U, on_success: impl FnOnce(T) -> U) -> U;
}

impl<T> TryExt<T> for Try<T> {
    fn recover(self, f: impl FnOnce(&anyhow::Error) -> T) -> Try<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Ok(f(&err)),
        }
    }

    fn recover_with(self, f: impl FnOnce(anyhow::Error) -> Try<T>) -> Try<T> {
        self.or_else(f)
    }

    fn transform<U>(
        self,
        on_success: impl FnOnce(T) -> Try<U>,
        on_failure: impl FnOnce(anyhow::Error) -> Try<U>,
    ) -> Try<U> {
        match self {
            Ok(value) => on_success(value),
            Err(err) => on_failure(err),
        }
    }

    fn filter(self, predicate: impl FnOnce(&T) -> bool, error: impl FnOnce() -> anyhow::Error) -> Try<T> {
        match self {
            Ok(value) if predicate(&value) => Ok(value),
            Ok(_) => Err(error()),
            Err(err) => Err(err),
        }
    }

    fn fold<U>(self, on_failure: impl FnOnce(anyhow::Error) -> U, on_success: impl FnOnce(T) -> U) -> U {
        match self {
            Ok(value) => on_success(value),
            Err(err) => on_failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn failing() -> Try<usize> {
        Err(anyhow!("disk on fire"))
    }

    #[test]
    fn recover_on_failure_applies_the_handler() {
        let recovered = failing().recover(|e| e.to_string().len());
        assert_eq!(recovered.unwrap(), "disk on fire".len());
    }

    #[test]
    fn recover_on_success_is_a_no_op() {
        let value: Try<usize> = Ok(7);
        assert_eq!(value.recover(|_| 0).unwrap(), 7);
    }

    #[test]
    fn recover_with_can_fail_again() {
        let still_failing = failing().recover_with(|e| Err(e.context("second attempt")));
        let err = still_failing.unwrap_err();
        assert_eq!(err.to_string(), "second attempt");
        assert_eq!(err.root_cause().to_string(), "disk on fire");

        assert_eq!(failing().recover_with(|_| Ok(1)).unwrap(), 1);
    }

    #[test]
    fn transform_unifies_both_arms() {
        let describe = |t: Try<usize>| {
            t.transform(|v| Ok(format!("ok {v}")), |e| Ok(format!("err {e}")))
                .unwrap()
        };
        assert_eq!(describe(Ok(3)), "ok 3");
        assert_eq!(describe(failing()), "err disk on fire");
    }

    #[test]
    fn filter_and_fold() {
        let ok: Try<usize> = Ok(4);
        assert!(ok.filter(|v| *v > 10, || anyhow!("too small")).is_err());

        let folded = failing().fold(|_| 0, |v| v + 1);
        assert_eq!(folded, 0);
    }
}
