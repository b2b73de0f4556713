//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was blank.
    Blank,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided string is not a `+digits` canonical number.
    InvalidCanonical(String),
}

impl ValidationError {
    /// True for the blank-field outcome that batch callers drop.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "no content"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {:?}", email),
            Self::InvalidCanonical(value) => {
                write!(f, "Invalid canonical phone number: {:?}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
