// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Fluent matchers producing readable diagnostics for [`upshot`] containers.
//!
//! # Why
//!
//! Asserting on an [`Upshot`](upshot::Upshot) by hand means branching on its variant
//! and formatting the payload yourself before every assertion. Matchers bundle the
//! predicate and the diagnostic: on mismatch they render a human-readable explanation
//! embedding the printed value or error, so a failing test says *what* was held, not
//! just that the variant was wrong.
//!
//! # Core Types
//!
//! - [`Matcher`]: a predicate over some actual value, reporting a [`Mismatch`] when it
//!   does not hold.
//! - [`Mismatch`]: the rendered expectation and explanation of a failed match.
//!
//! Matchers only consume the container's four queries (`has_value`, `is_failure`,
//! `value`, `error`), which are side-effect-free, so checking an instance never
//! changes it.
//!
//! # Examples
//!
//! ```rust
//! use upshot::Upshot;
//! use upshot_matchers::{assert_matched, failed_with, succeeded_with};
//!
//! let ok: Upshot<i32, String> = Upshot::success(3).and_then(|x| 2 * x);
//! assert_matched!(ok, succeeded_with(6));
//!
//! let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string()).and_then(|x: i32| 2 * x);
//! assert_matched!(ko, failed_with("Oops".to_string()));
//! ```
//!
//! For non-fatal checking, call [`Matcher::check`] directly and inspect the returned
//! [`Mismatch`]:
//!
//! ```rust
//! use upshot::Upshot;
//! use upshot_matchers::{succeeded, Matcher};
//!
//! let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
//! let mismatch = succeeded().check(&ko).unwrap_err();
//! assert_eq!(mismatch.to_string(), "expected a success, but failed with <\"Oops\">");
//! ```

use std::fmt::{Display, Formatter};

mod macros;
mod matchers;

pub use matchers::*;

/// A predicate over an actual value that renders a diagnostic when it does not hold.
///
/// Implementations must be pure: checking must not modify the actual value or the
/// matcher, and repeated checks of the same value must agree.
///
/// # Examples
///
/// A custom matcher is a struct plus one `check` implementation:
///
/// ```rust
/// use upshot_matchers::{Matcher, Mismatch};
///
/// struct IsEven;
///
/// impl Matcher<i32> for IsEven {
///     fn check(&self, actual: &i32) -> Result<(), Mismatch> {
///         if actual % 2 == 0 {
///             Ok(())
///         } else {
///             Err(Mismatch::new("an even number", format!("was {actual}")))
///         }
///     }
/// }
///
/// assert!(IsEven.check(&4).is_ok());
/// assert!(IsEven.check(&3).is_err());
/// ```
pub trait Matcher<A> {
    /// Checks the matcher against an actual value.
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] describing the expectation and what was found instead.
    fn check(&self, actual: &A) -> Result<(), Mismatch>;
}

/// The diagnostic produced by a failed match: what was expected, and what was found.
///
/// Renders as `expected <expectation>, but <explanation>`, with the actual payload
/// embedded in the explanation.
///
/// # Examples
///
/// ```rust
/// use upshot_matchers::Mismatch;
///
/// let mismatch = Mismatch::new("a success", "failed with <\"Oops\">");
/// assert_eq!(mismatch.to_string(), "expected a success, but failed with <\"Oops\">");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    expectation: String,
    explanation: String,
}

impl Mismatch {
    /// Creates a mismatch from an expectation and an explanation.
    pub fn new(expectation: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            expectation: expectation.into(),
            explanation: explanation.into(),
        }
    }

    /// The expectation that was not met, e.g. `a success`.
    #[must_use]
    pub fn expectation(&self) -> &str {
        &self.expectation
    }

    /// The explanation of what was found instead, embedding the printed payload,
    /// e.g. `failed with <"Oops">`.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected {}, but {}", self.expectation, self.explanation)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Mismatch: Debug, Clone, PartialEq, Send, Sync);

    #[test]
    fn mismatch_accessors() {
        let mismatch = Mismatch::new("a failure", "succeeded with <1>");

        assert_eq!(mismatch.expectation(), "a failure");
        assert_eq!(mismatch.explanation(), "succeeded with <1>");
    }

    #[test]
    fn mismatch_display() {
        let mismatch = Mismatch::new("a failure", "succeeded with <1>");

        assert_eq!(mismatch.to_string(), "expected a failure, but succeeded with <1>");
    }
}
