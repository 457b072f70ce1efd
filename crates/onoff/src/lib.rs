// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Strong-typed boolean flags that cannot be mixed up at call sites.
//!
//! # Why
//!
//! A function taking two raw `bool` parameters accepts them in either order and the
//! compiler cannot tell the difference. [`flag_type!`] generates one distinct nominal
//! type per flag, so passing the wrong flag, or a raw boolean, is a type error.
//!
//! # Examples
//!
//! ```rust
//! use onoff::flag_type;
//!
//! flag_type! {
//!     /// Whether existing files may be replaced.
//!     pub struct Overwrite;
//! }
//!
//! flag_type! {
//!     /// Whether to simulate the operation without touching anything.
//!     pub struct DryRun;
//! }
//!
//! fn copy_files(overwrite: Overwrite, dry_run: DryRun) {
//!     if dry_run.is_set() {
//!         return;
//!     }
//!     // ...
//!     let _ = overwrite;
//! }
//!
//! // Call sites read as named arguments, and the argument order is compiler-checked:
//! copy_files(Overwrite::ON, DryRun::OFF);
//! ```
//!
//! Flags behave like booleans where it is explicit:
//!
//! ```rust
//! use onoff::flag_type;
//!
//! flag_type! {
//!     /// Whether verbose output is enabled.
//!     pub struct Verbose;
//! }
//!
//! let verbose = Verbose::new(true);
//! assert!(verbose.is_set());
//! assert!(!(!verbose));
//! assert_eq!(verbose.to_string(), "Verbose(on)");
//! ```

/// Defines a distinct boolean flag type.
///
/// The generated type is a `bool` newtype with:
///
/// - `ON` / `OFF` constants and a `new(bool)` constructor,
/// - an `is_set()` query returning the raw boolean,
/// - a `!` operator yielding the negated raw boolean,
/// - `Debug`, `Display`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// Two flag types generated by this macro are deliberately incompatible: there are no
/// conversions between them, nor from raw `bool`s, other than the explicit
/// constructor.
///
/// # Examples
///
/// ```rust
/// use onoff::flag_type;
///
/// flag_type! {
///     /// Whether the cache should be bypassed.
///     pub struct BypassCache;
/// }
///
/// assert!(BypassCache::ON.is_set());
/// assert!(!BypassCache::OFF.is_set());
/// ```
#[macro_export]
macro_rules! flag_type {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name(bool);

        impl $name {
            /// The flag in its set state.
            $vis const ON: Self = Self(true);

            /// The flag in its cleared state.
            $vis const OFF: Self = Self(false);

            /// Creates a flag from a raw boolean.
            #[must_use]
            $vis const fn new(value: bool) -> Self {
                Self(value)
            }

            /// Returns `true` if the flag is set.
            #[must_use]
            $vis const fn is_set(self) -> bool {
                self.0
            }
        }

        impl ::core::ops::Not for $name {
            type Output = bool;

            fn not(self) -> bool {
                !self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(
                    f,
                    "{}({})",
                    ::core::stringify!($name),
                    if self.0 { "on" } else { "off" }
                )
            }
        }
    };
}
