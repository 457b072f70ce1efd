// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A small log-message value type used to demonstrate the upshot crates.
//!
//! This crate holds no machinery of its own: [`LogMessage`] is a plain record with
//! named constructors and structural equality, and [`LogLevel`] is a three-value
//! severity scale. The pair exists to give the matcher and container crates a
//! realistic domain type to exercise, in particular the rendering contract that
//! assertion diagnostics rely on:
//!
//! ```rust
//! use logbook::LogMessage;
//!
//! let msg = LogMessage::error("AaA");
//! assert_eq!(msg.to_string(), "{ .level = ERROR, .text = AaA }");
//! ```

use std::fmt::{Display, Formatter};

/// The severity of a [`LogMessage`].
///
/// Renders as `DEBUG` / `INFO` / `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Diagnostic chatter, usually filtered out.
    Debug,

    /// Routine operational messages.
    Info,

    /// Something went wrong.
    Error,
}

impl LogLevel {
    /// Returns the next level in the cycle Debug → Info → Error → Debug.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logbook::LogLevel;
    ///
    /// assert_eq!(LogLevel::Debug.next(), LogLevel::Info);
    /// assert_eq!(LogLevel::Error.next(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Debug => Self::Info,
            Self::Info => Self::Error,
            Self::Error => Self::Debug,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A log message: a severity plus its text.
///
/// A pure data record with structural equality. The `Display` rendering is a
/// contract relied upon by assertion diagnostics: `{ .level = ERROR, .text = AaA }`.
///
/// # Examples
///
/// ```rust
/// use logbook::{LogLevel, LogMessage};
///
/// let msg = LogMessage::info("starting up");
/// assert_eq!(msg.level, LogLevel::Info);
/// assert_eq!(msg.text, "starting up");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    /// The message severity.
    pub level: LogLevel,

    /// The message text.
    pub text: String,
}

impl LogMessage {
    /// Creates a message at [`LogLevel::Debug`].
    #[must_use]
    pub fn debug(text: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Debug,
            text: text.into(),
        }
    }

    /// Creates a message at [`LogLevel::Info`].
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            text: text.into(),
        }
    }

    /// Creates a message at [`LogLevel::Error`].
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            text: text.into(),
        }
    }
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ .level = {}, .text = {} }}", self.level, self.text)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(LogLevel: Debug, Clone, Copy, PartialEq, Eq, Send, Sync);
    assert_impl_all!(LogMessage: Debug, Clone, PartialEq, Eq, Send, Sync);

    #[test]
    fn named_constructors_set_the_level() {
        assert_eq!(LogMessage::debug("x").level, LogLevel::Debug);
        assert_eq!(LogMessage::info("x").level, LogLevel::Info);
        assert_eq!(LogMessage::error("x").level, LogLevel::Error);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(LogMessage::info("same"), LogMessage::info("same"));
        assert_ne!(LogMessage::info("same"), LogMessage::info("different"));
        assert_ne!(LogMessage::info("same"), LogMessage::error("same"));
    }

    #[test]
    fn level_display() {
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn message_display_contract() {
        let msg = LogMessage::error("AaA");

        assert_eq!(msg.to_string(), "{ .level = ERROR, .text = AaA }");
    }

    #[test]
    fn levels_cycle() {
        let mut level = LogLevel::Debug;
        let mut seen = Vec::new();

        for _ in 0..6 {
            seen.push(level);
            level = level.next();
        }

        assert_eq!(
            seen,
            [
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Error,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Error,
            ]
        );
    }
}
