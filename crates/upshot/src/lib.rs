// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A success-or-failure container with short-circuiting chaining.
//!
//! # Why
//!
//! This crate provides [`Upshot`], a tagged container holding exactly one of a success
//! value or a failure error. It lets a pipeline of transformations run without explicit
//! error checks between steps: the first failure short-circuits the rest of the chain
//! and is carried through to the end unchanged.
//!
//! # Core Type
//!
//! - [`Upshot`]: holds either a success value or a failure error, never both, never neither.
//!
//! # Examples
//!
//! ## Forward chaining
//!
//! ```rust
//! use upshot::Upshot;
//!
//! let doubled: Upshot<i32, String> = Upshot::success(3).and_then(|x| 2 * x);
//! assert!(doubled.has_value());
//! assert_eq!(*doubled.value(), 6);
//!
//! // A failure passes through every subsequent step untouched.
//! let failed: Upshot<i32, String> = Upshot::failure("Oops".to_string()).and_then(|x: i32| 2 * x);
//! assert!(failed.is_failure());
//! assert_eq!(failed.error(), "Oops");
//! ```
//!
//! ## Changing the value type along the chain
//!
//! The transform's return type determines the value type of the next link, while the
//! error type threads through unchanged:
//!
//! ```rust
//! use upshot::Upshot;
//!
//! let len: Upshot<usize, String> = Upshot::success(6)
//!     .and_then(|x| x.to_string())
//!     .and_then(|s| s.len());
//! assert_eq!(*len.value(), 1);
//! ```

use std::fmt::{Debug, Formatter};

/// The outcome of a fallible computation: a success value or a failure error.
///
/// Exactly one of the two variants holds at any time. The variant is fixed at
/// construction and never changes; there are no mutation operations. The container
/// owns its payload by value.
///
/// The variant is only observable through [`Upshot::has_value`] and
/// [`Upshot::is_failure`], which are side-effect-free and always consistent with each
/// other. Rust has no implicit boolean conversions, so `has_value` is also the answer
/// to "is this instance truthy".
///
/// `Upshot` deliberately implements no equality of its own: tests compare instances
/// through their extracted payloads, typically via the matchers in the companion
/// `upshot_matchers` crate.
///
/// # Examples
///
/// ```rust
/// use upshot::Upshot;
///
/// let ok: Upshot<i32, String> = Upshot::success(0);
/// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
///
/// assert!(ok.has_value());
/// assert!(!ok.is_failure());
/// assert_eq!(*ok.value(), 0);
///
/// assert!(!ko.has_value());
/// assert!(ko.is_failure());
/// assert_eq!(ko.error(), "Oops");
/// ```
#[derive(Clone)]
pub struct Upshot<V, E> {
    inner: Inner<V, E>,
}

#[derive(Clone)]
enum Inner<V, E> {
    Success(V),
    Failure(E),
}

impl<V, E> Upshot<V, E> {
    /// Creates a container holding a success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ok: Upshot<i32, String> = Upshot::success(42);
    /// assert!(ok.has_value());
    /// ```
    #[must_use]
    pub const fn success(value: V) -> Self {
        Self {
            inner: Inner::Success(value),
        }
    }

    /// Creates a container holding a failure error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ko: Upshot<i32, &str> = Upshot::failure("out of range");
    /// assert!(ko.is_failure());
    /// ```
    #[must_use]
    pub const fn failure(error: E) -> Self {
        Self {
            inner: Inner::Failure(error),
        }
    }

    /// Returns `true` if this container was constructed as a success.
    ///
    /// Exactly one of `has_value` and [`Upshot::is_failure`] is `true` for any instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ok: Upshot<i32, String> = Upshot::success(1);
    /// assert!(ok.has_value());
    /// ```
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self.inner, Inner::Success(_))
    }

    /// Returns `true` if this container was constructed as a failure.
    ///
    /// Exactly one of [`Upshot::has_value`] and `is_failure` is `true` for any instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ko: Upshot<i32, &str> = Upshot::failure("Oops");
    /// assert!(ko.is_failure());
    /// ```
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.inner, Inner::Failure(_))
    }

    /// Returns a reference to the held success value.
    ///
    /// Callers must branch on [`Upshot::has_value`] first; this accessor is
    /// deliberately unchecked in its signature and fails loudly on misuse instead of
    /// returning a default.
    ///
    /// # Panics
    ///
    /// Panics if the container holds a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ok: Upshot<i32, String> = Upshot::success(6);
    /// assert_eq!(*ok.value(), 6);
    /// ```
    #[must_use]
    pub fn value(&self) -> &V {
        match &self.inner {
            Inner::Success(value) => value,
            #[expect(clippy::panic, reason = "accessor precondition violations must fail loudly")]
            Inner::Failure(_) => panic!("called `Upshot::value()` on a failure"),
        }
    }

    /// Returns a reference to the held failure error.
    ///
    /// Symmetric contract to [`Upshot::value`]: callers must branch on
    /// [`Upshot::is_failure`] first.
    ///
    /// # Panics
    ///
    /// Panics if the container holds a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
    /// assert_eq!(ko.error(), "Oops");
    /// ```
    #[must_use]
    pub fn error(&self) -> &E {
        match &self.inner {
            #[expect(clippy::panic, reason = "accessor precondition violations must fail loudly")]
            Inner::Success(_) => panic!("called `Upshot::error()` on a success"),
            Inner::Failure(error) => error,
        }
    }

    /// Consumes the container and returns the held success value.
    ///
    /// # Panics
    ///
    /// Panics if the container holds a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ok: Upshot<String, String> = Upshot::success("done".to_string());
    /// assert_eq!(ok.into_value(), "done");
    /// ```
    #[must_use]
    pub fn into_value(self) -> V {
        match self.inner {
            Inner::Success(value) => value,
            #[expect(clippy::panic, reason = "accessor precondition violations must fail loudly")]
            Inner::Failure(_) => panic!("called `Upshot::into_value()` on a failure"),
        }
    }

    /// Consumes the container and returns the held failure error.
    ///
    /// # Panics
    ///
    /// Panics if the container holds a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
    /// assert_eq!(ko.into_error(), "Oops");
    /// ```
    #[must_use]
    pub fn into_error(self) -> E {
        match self.inner {
            #[expect(clippy::panic, reason = "accessor precondition violations must fail loudly")]
            Inner::Success(_) => panic!("called `Upshot::into_error()` on a success"),
            Inner::Failure(error) => error,
        }
    }

    /// Applies a transformation to the success value, short-circuiting on failure.
    ///
    /// If this container holds a failure, the transform is never invoked and the error
    /// is carried into the returned container unchanged. If it holds a success, the
    /// transform runs on the value and its return value becomes the new success. The
    /// transform's return type determines the value type of the result; the error type
    /// threads through an arbitrarily long chain unchanged.
    ///
    /// Any unary callable of the value works, including plain method references.
    ///
    /// Note the difference from [`Result::and_then`]: the transform here returns a
    /// plain value that is wrapped as a success, so a step cannot itself introduce a
    /// new failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ok: Upshot<i32, String> = Upshot::success(3);
    /// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
    ///
    /// assert_eq!(*ok.and_then(|x| 2 * x).value(), 6);
    /// assert_eq!(ko.and_then(|x| 2 * x).error(), "Oops");
    ///
    /// // Method references are ordinary function values.
    /// let len: Upshot<usize, String> = Upshot::success("6".to_string()).and_then(|s| s.len());
    /// assert_eq!(*len.value(), 1);
    /// ```
    #[must_use]
    pub fn and_then<T>(self, f: impl FnOnce(V) -> T) -> Upshot<T, E> {
        match self.inner {
            Inner::Success(value) => Upshot::success(f(value)),
            Inner::Failure(error) => Upshot::failure(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Upshot<V, E> {
    /// Converts `Ok` into a success and `Err` into a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let parsed: Upshot<i32, std::num::ParseIntError> = "42".parse().into();
    /// assert_eq!(*parsed.value(), 42);
    /// ```
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<V, E> From<Upshot<V, E>> for Result<V, E> {
    /// Converts a success into `Ok` and a failure into `Err`, so `Upshot`-based
    /// pipelines compose with `?`-based code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let ok: Upshot<i32, String> = Upshot::success(1);
    /// let result: Result<i32, String> = ok.into();
    /// assert_eq!(result, Ok(1));
    /// ```
    fn from(upshot: Upshot<V, E>) -> Self {
        match upshot.inner {
            Inner::Success(value) => Ok(value),
            Inner::Failure(error) => Err(error),
        }
    }
}

impl<V: Debug, E: Debug> Debug for Upshot<V, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::Success(value) => f.debug_tuple("Upshot::success").field(value).finish(),
            Inner::Failure(error) => f.debug_tuple("Upshot::failure").field(error).finish(),
        }
    }
}
