//! Error types for the phone canonicalization engine.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors produced by the strict validator.
///
/// `NoContent` is an expected outcome (the field was blank) and callers are
/// meant to skip it silently; every other variant carries the offending input
/// so it can be reported per record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// Input was blank or whitespace-only
    #[error("no content")]
    NoContent,

    /// Local number with fewer than 10 digits after the country code
    #[error("too few digits: {0:?}")]
    TooFewDigits(String),

    /// Local exchange code starts with 0 or 1
    #[error("invalid prefix (starts with 0 or 1): {0:?}")]
    InvalidPrefix(String),

    /// Local number uses a reserved machine-to-machine area code
    #[error("non-geographic area code: {0:?}")]
    NonGeographicAreaCode(String),
}

impl PhoneError {
    /// True for the blank-field outcome that batch callers drop.
    pub fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }

    /// The raw candidate that was rejected, if any.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::NoContent => None,
            Self::TooFewDigits(s) | Self::InvalidPrefix(s) | Self::NonGeographicAreaCode(s) => {
                Some(s)
            }
        }
    }
}

/// Errors produced by the display formatter.
///
/// These indicate a builder bug or corrupted storage, never bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The canonical string does not have the expected shape
    #[error("malformed canonical number {value:?}: {reason}")]
    MalformedCanonical { value: String, reason: String },
}

impl FormatError {
    pub(crate) fn malformed(value: &str, reason: impl Into<String>) -> Self {
        Self::MalformedCanonical {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with PhoneError
pub type PhoneResult<T> = Result<T, PhoneError>;

/// Convenience type alias for Results with FormatError
pub type FormatResult<T> = Result<T, FormatError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
