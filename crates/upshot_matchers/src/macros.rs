// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Assertion macros wrapping the matcher API.

/// Asserts that an actual value satisfies a matcher, panicking with the rendered
/// [`Mismatch`](crate::Mismatch) diagnostic otherwise.
///
/// This is the fatal-assertion entry point; for non-fatal checking, call
/// [`Matcher::check`](crate::Matcher::check) directly.
///
/// # Examples
///
/// ```rust
/// use upshot::Upshot;
/// use upshot_matchers::{assert_matched, failed_with_message_containing, succeeded_with};
///
/// let ok: Upshot<i32, String> = Upshot::success(6);
/// assert_matched!(ok, succeeded_with(6));
///
/// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
/// assert_matched!(ko, failed_with_message_containing("Oo"));
/// ```
///
/// A failing assertion panics with the diagnostic:
///
/// ```rust,should_panic
/// use upshot::Upshot;
/// use upshot_matchers::{assert_matched, succeeded};
///
/// let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());
/// // Panics with: expected a success, but failed with <"Oops">
/// assert_matched!(ko, succeeded());
/// ```
#[macro_export]
macro_rules! assert_matched {
    ($actual:expr, $matcher:expr $(,)?) => {
        match $crate::Matcher::check(&$matcher, &$actual) {
            ::core::result::Result::Ok(()) => {}
            ::core::result::Result::Err(mismatch) => ::core::panic!("{mismatch}"),
        }
    };
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use upshot::Upshot;

    use crate::{failed, succeeded};

    #[test]
    fn passing_assertion_is_silent() {
        let ok: Upshot<i32, String> = Upshot::success(1);

        assert_matched!(ok, succeeded());
        assert_matched!(ok, succeeded(),);
    }

    #[test]
    #[should_panic(expected = "expected a success, but failed with <\"Oops\">")]
    fn failing_assertion_panics_with_the_diagnostic() {
        let ko: Upshot<i32, String> = Upshot::failure("Oops".to_string());

        assert_matched!(ko, succeeded());
    }

    #[test]
    #[should_panic(expected = "expected a failure, but succeeded with <1>")]
    fn failing_failure_assertion_panics_with_the_diagnostic() {
        let ok: Upshot<i32, String> = Upshot::success(1);

        assert_matched!(ok, failed());
    }
}
