//! Dialing lookup tables shared by the builder, formatter, and validator.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// International dialing codes that are exactly two digits long.
///
/// Only used to pick the split point between country code and national
/// number; any code not listed here is treated as three digits.
#[rustfmt::skip]
pub const TWO_DIGIT_COUNTRY_CODES: &[&str] = &[
    "20", "27",
    "30", "31", "32", "33", "34", "36", "39",
    "40", "41", "43", "44", "45", "46", "47", "48", "49",
    "51", "52", "53", "54", "55", "56", "57", "58",
    "60", "61", "62", "63", "64", "65", "66",
    "70", "71", "72", "73", "74", "75", "76", "77", "78", "79",
    "81", "82", "84", "86", "87", "88",
    "90", "91", "92", "93", "94", "95", "98",
];

/// North American 5XX area codes reserved for machine-to-machine use.
#[rustfmt::skip]
pub const NON_GEOGRAPHIC_AREA_CODES: &[&str] = &[
    "500", "511",
    "521", "522", "523", "524", "525", "526", "527", "528", "529",
    "532", "533", "535", "538",
    "542", "543", "544", "545", "546", "547", "549",
    "550", "552", "553", "554", "555", "556", "558",
    "566", "569",
    "576", "577", "578", "588", "589",
];

static STANDARD: Lazy<DialingTables> =
    Lazy::new(|| DialingTables::new(TWO_DIGIT_COUNTRY_CODES, NON_GEOGRAPHIC_AREA_CODES));

/// Immutable country-code and area-code sets.
#[derive(Debug, Clone)]
pub struct DialingTables {
    two_digit_country_codes: HashSet<&'static str>,
    non_geographic_area_codes: HashSet<&'static str>,
}

impl DialingTables {
    /// Build tables from explicit code lists.
    pub fn new(country_codes: &[&'static str], area_codes: &[&'static str]) -> Self {
        Self {
            two_digit_country_codes: country_codes.iter().copied().collect(),
            non_geographic_area_codes: area_codes.iter().copied().collect(),
        }
    }

    /// The process-wide standard tables, built on first use.
    pub fn standard() -> &'static DialingTables {
        &STANDARD
    }

    pub fn is_two_digit_country_code(&self, code: &str) -> bool {
        self.two_digit_country_codes.contains(code)
    }

    pub fn is_non_geographic_area_code(&self, area_code: &str) -> bool {
        self.non_geographic_area_codes.contains(area_code)
    }

    /// Split an all-digit international string into `(country code, rest)`.
    ///
    /// The first two digits win when they are a known two-digit code;
    /// otherwise the first three digits are the country code. This is not
    /// longest-match: a listed two-digit code shadows any three-digit code
    /// that starts with it. Returns `None` if the input is too short to
    /// hold the chosen code.
    pub fn split_country_code<'a>(&self, digits: &'a str) -> Option<(&'a str, &'a str)> {
        let two = digits.get(..2)?;
        let width = if self.is_two_digit_country_code(two) { 2 } else { 3 };
        if digits.len() < width || !digits.is_char_boundary(width) {
            return None;
        }
        Some(digits.split_at(width))
    }
}

impl Default for DialingTables {
    fn default() -> Self {
        Self::standard().clone()
    }
}
