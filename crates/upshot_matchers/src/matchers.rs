// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The built-in matchers for [`Upshot`] containers and plain values.

use std::fmt::{Debug, Display};

use upshot::Upshot;

use crate::{Matcher, Mismatch};

/// Matches any container holding a success, regardless of the value.
///
/// # Examples
///
/// ```rust
/// use upshot::Upshot;
/// use upshot_matchers::{assert_matched, succeeded};
///
/// let ok: Upshot<i32, String> = Upshot::success(0);
/// assert_matched!(ok, succeeded());
/// ```
#[must_use]
pub const fn succeeded() -> Succeeded {
    Succeeded
}

/// Matches any container holding a failure, regardless of the error.
///
/// # Examples
///
/// ```rust
/// use upshot::Upshot;
/// use upshot_matchers::{assert_matched, failed};
///
/// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
/// assert_matched!(ko, failed());
/// ```
#[must_use]
pub const fn failed() -> Failed {
    Failed
}

/// Matches a container holding a success whose value equals `expected`.
///
/// # Examples
///
/// ```rust
/// use upshot::Upshot;
/// use upshot_matchers::{assert_matched, succeeded_with};
///
/// let ok: Upshot<i32, String> = Upshot::success(6);
/// assert_matched!(ok, succeeded_with(6));
/// ```
#[must_use]
pub const fn succeeded_with<V>(expected: V) -> SucceededWith<V> {
    SucceededWith { expected }
}

/// Matches a container holding a failure whose error equals `expected`.
///
/// # Examples
///
/// ```rust
/// use upshot::Upshot;
/// use upshot_matchers::{assert_matched, failed_with};
///
/// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
/// assert_matched!(ko, failed_with("Oops".to_string()));
/// ```
#[must_use]
pub const fn failed_with<E>(expected: E) -> FailedWith<E> {
    FailedWith { expected }
}

/// Matches a container holding a failure whose error message contains `substring`.
///
/// The error type only needs to expose its message as a string slice.
///
/// # Examples
///
/// ```rust
/// use upshot::Upshot;
/// use upshot_matchers::{assert_matched, failed_with_message_containing};
///
/// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
/// assert_matched!(ko, failed_with_message_containing("Oo"));
/// ```
#[must_use]
pub fn failed_with_message_containing(substring: impl Into<String>) -> FailedWithMessageContaining {
    FailedWithMessageContaining {
        substring: substring.into(),
    }
}

/// Matches a plain value equal to `expected`, rendering both operands via their
/// [`Display`] implementation on mismatch.
///
/// This is the matcher to reach for when asserting equality of domain records whose
/// rendering contract matters: the diagnostic embeds the actual operand's rendered
/// text verbatim.
///
/// # Examples
///
/// ```rust
/// use upshot_matchers::{assert_matched, eq};
///
/// assert_matched!(21 + 21, eq(42));
/// ```
#[must_use]
pub const fn eq<T>(expected: T) -> EqTo<T> {
    EqTo { expected }
}

/// See [`succeeded`].
#[derive(Debug, Clone, Copy)]
pub struct Succeeded;

impl<V, E: Debug> Matcher<Upshot<V, E>> for Succeeded {
    fn check(&self, actual: &Upshot<V, E>) -> Result<(), Mismatch> {
        if actual.is_failure() {
            return Err(Mismatch::new(
                "a success",
                format!("failed with <{:?}>", actual.error()),
            ));
        }

        Ok(())
    }
}

/// See [`failed`].
#[derive(Debug, Clone, Copy)]
pub struct Failed;

impl<V: Debug, E> Matcher<Upshot<V, E>> for Failed {
    fn check(&self, actual: &Upshot<V, E>) -> Result<(), Mismatch> {
        if actual.has_value() {
            return Err(Mismatch::new(
                "a failure",
                format!("succeeded with <{:?}>", actual.value()),
            ));
        }

        Ok(())
    }
}

/// See [`succeeded_with`].
#[derive(Debug, Clone, Copy)]
pub struct SucceededWith<V> {
    expected: V,
}

impl<V, E> Matcher<Upshot<V, E>> for SucceededWith<V>
where
    V: Debug + PartialEq,
    E: Debug,
{
    fn check(&self, actual: &Upshot<V, E>) -> Result<(), Mismatch> {
        let expectation = format!("a success with value {:?}", self.expected);

        if actual.is_failure() {
            return Err(Mismatch::new(
                expectation,
                format!("failed with <{:?}>", actual.error()),
            ));
        }

        if *actual.value() != self.expected {
            return Err(Mismatch::new(
                expectation,
                format!("property `value` is {:?}", actual.value()),
            ));
        }

        Ok(())
    }
}

/// See [`failed_with`].
#[derive(Debug, Clone, Copy)]
pub struct FailedWith<E> {
    expected: E,
}

impl<V, E> Matcher<Upshot<V, E>> for FailedWith<E>
where
    V: Debug,
    E: Debug + PartialEq,
{
    fn check(&self, actual: &Upshot<V, E>) -> Result<(), Mismatch> {
        let expectation = format!("a failure with error {:?}", self.expected);

        if actual.has_value() {
            return Err(Mismatch::new(
                expectation,
                format!("succeeded with <{:?}>", actual.value()),
            ));
        }

        if *actual.error() != self.expected {
            return Err(Mismatch::new(
                expectation,
                format!("property `error` is {:?}", actual.error()),
            ));
        }

        Ok(())
    }
}

/// See [`failed_with_message_containing`].
#[derive(Debug, Clone)]
pub struct FailedWithMessageContaining {
    substring: String,
}

impl<V, E> Matcher<Upshot<V, E>> for FailedWithMessageContaining
where
    V: Debug,
    E: AsRef<str> + Debug,
{
    fn check(&self, actual: &Upshot<V, E>) -> Result<(), Mismatch> {
        let expectation = format!("a failure with an error containing {:?}", self.substring);

        if actual.has_value() {
            return Err(Mismatch::new(
                expectation,
                format!("succeeded with <{:?}>", actual.value()),
            ));
        }

        if !actual.error().as_ref().contains(&self.substring) {
            return Err(Mismatch::new(
                expectation,
                format!("property `error` is {:?}", actual.error()),
            ));
        }

        Ok(())
    }
}

/// See [`eq`].
#[derive(Debug, Clone, Copy)]
pub struct EqTo<T> {
    expected: T,
}

impl<T: Display + PartialEq> Matcher<T> for EqTo<T> {
    fn check(&self, actual: &T) -> Result<(), Mismatch> {
        if *actual != self.expected {
            return Err(Mismatch::new(
                format!("`{}`", self.expected),
                format!("was `{actual}`"),
            ));
        }

        Ok(())
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> Upshot<i32, String> {
        Upshot::success(0)
    }

    fn ko() -> Upshot<i32, String> {
        Upshot::failure("Oops".to_string())
    }

    #[test]
    fn succeeded_on_success() {
        assert!(succeeded().check(&ok()).is_ok());
    }

    #[test]
    fn succeeded_on_failure_renders_the_error() {
        let mismatch = succeeded().check(&ko()).unwrap_err();

        assert_eq!(mismatch.explanation(), "failed with <\"Oops\">");
    }

    #[test]
    fn failed_on_failure() {
        assert!(failed().check(&ko()).is_ok());
    }

    #[test]
    fn failed_on_success_renders_the_value() {
        let ok: Upshot<i32, String> = Upshot::success(1);
        let mismatch = failed().check(&ok).unwrap_err();

        assert_eq!(mismatch.explanation(), "succeeded with <1>");
    }

    #[test]
    fn succeeded_with_matching_value() {
        assert!(succeeded_with(0).check(&ok()).is_ok());
    }

    #[test]
    fn succeeded_with_on_failure_renders_the_error() {
        let mismatch = succeeded_with(0).check(&ko()).unwrap_err();

        assert_eq!(mismatch.explanation(), "failed with <\"Oops\">");
    }

    #[test]
    fn succeeded_with_wrong_value_renders_the_property() {
        let ok: Upshot<i32, String> = Upshot::success(1);
        let mismatch = succeeded_with(0).check(&ok).unwrap_err();

        assert_eq!(mismatch.explanation(), "property `value` is 1");
    }

    #[test]
    fn failed_with_matching_error() {
        assert!(failed_with("Oops".to_string()).check(&ko()).is_ok());
    }

    #[test]
    fn failed_with_wrong_error_renders_the_property() {
        let ko: Upshot<i32, String> = Upshot::failure("Wrong message".to_string());
        let mismatch = failed_with("Oops".to_string()).check(&ko).unwrap_err();

        assert_eq!(mismatch.explanation(), "property `error` is \"Wrong message\"");
    }

    #[test]
    fn failed_with_on_success_renders_the_value() {
        let ok: Upshot<i32, String> = Upshot::success(1);
        let mismatch = failed_with("Oops".to_string()).check(&ok).unwrap_err();

        assert_eq!(mismatch.explanation(), "succeeded with <1>");
    }

    #[test]
    fn message_containing_matches_substrings() {
        assert!(failed_with_message_containing("Oo").check(&ko()).is_ok());
        assert!(failed_with_message_containing("Oops").check(&ko()).is_ok());
    }

    #[test]
    fn message_containing_without_substring_renders_the_error() {
        let mismatch = failed_with_message_containing("absent").check(&ko()).unwrap_err();

        assert_eq!(mismatch.explanation(), "property `error` is \"Oops\"");
    }

    #[test]
    fn eq_matches_equal_values() {
        assert!(eq(42).check(&42).is_ok());
    }

    #[test]
    fn eq_renders_both_operands_via_display() {
        let mismatch = eq(42).check(&7).unwrap_err();

        assert_eq!(mismatch.to_string(), "expected `42`, but was `7`");
    }

    // The matcher diagnostic embeds arbitrary error payloads through their Debug
    // rendering, the same way the value payloads are embedded.
    #[test]
    fn structured_error_payloads_render_via_debug() {
        #[derive(Debug, Clone, PartialEq)]
        struct Structured {
            i: i32,
            l: i64,
        }

        let ko: Upshot<i32, Structured> = Upshot::failure(Structured { i: 1, l: 2 });
        let mismatch = succeeded().check(&ko).unwrap_err();

        assert_eq!(mismatch.explanation(), "failed with <Structured { i: 1, l: 2 }>");
    }
}
