//! CanonicalNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number in canonical `+<country code><national number>` form.
///
/// The constructor only checks the outer shape (`+` followed by ASCII
/// digits). Length rules are policy and live in the validator and the
/// formatter, so a stored value that breaks them can still be loaded and
/// reported.
///
/// # Example
///
/// ```
/// use phone_canon::domain::CanonicalNumber;
///
/// let phone = CanonicalNumber::new("+15102345678").unwrap();
/// assert!(phone.is_zone1());
/// assert_eq!(phone.digits(), "15102345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    /// Create a new CanonicalNumber, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCanonical` unless the value is a `+`
    /// followed by at least one ASCII digit and nothing else.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidCanonical(value));
        }
        Ok(Self(value))
    }

    /// Build from parts the engine has already reduced to digits.
    pub(crate) fn from_parts(prefix: &str, digits: &str) -> Self {
        let mut value = String::with_capacity(prefix.len() + digits.len());
        value.push_str(prefix);
        value.push_str(digits);
        debug_assert!(Self::is_valid(&value), "engine built {value:?}");
        Self(value)
    }

    fn is_valid(value: &str) -> bool {
        match value.strip_prefix('+') {
            Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }

    /// Get the canonical number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The digits after the leading `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// True for North American (country code 1) numbers.
    pub fn is_zone1(&self) -> bool {
        self.0.starts_with("+1")
    }
}

impl AsRef<str> for CanonicalNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for CanonicalNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for CanonicalNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CanonicalNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
