//! Canonical-form builder shared by the recognizer cascade.
//!
//! Takes the text a cascade rule matched plus its zone flag and assembles
//! the `+<country code><national number>` form.

use crate::domain::{CanonicalNumber, DialingTables};
use crate::normalize::strip_non_digits;

/// Minimum national-number digits an international number must keep.
pub const MIN_NATIONAL_DIGITS: usize = 5;

/// Assemble a canonical number from a matched fragment.
///
/// Zone 1 fragments get `+` when the matched text already starts with `1`,
/// otherwise `+1`. International fragments have their country code split
/// off via [`DialingTables::split_country_code`]; the national part then
/// loses any leading run of `0`/`1` (exit-code debris) and one repeated
/// copy of the country code. Returns `None` when fewer than
/// [`MIN_NATIONAL_DIGITS`] national digits remain.
pub fn build_canonical(
    matched: &str,
    zone1: bool,
    tables: &DialingTables,
) -> Option<CanonicalNumber> {
    let digits = strip_non_digits(matched);
    if digits.is_empty() {
        return None;
    }

    if zone1 {
        let prefix = if matched.starts_with('1') { "+" } else { "+1" };
        return Some(CanonicalNumber::from_parts(prefix, &digits));
    }

    let (country_code, rest) = tables.split_country_code(&digits)?;
    let rest = rest.trim_start_matches(|c: char| c == '0' || c == '1');
    let rest = rest.strip_prefix(country_code).unwrap_or(rest);
    if rest.len() < MIN_NATIONAL_DIGITS {
        return None;
    }

    let mut national = String::with_capacity(country_code.len() + rest.len());
    national.push_str(country_code);
    national.push_str(rest);
    Some(CanonicalNumber::from_parts("+", &national))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(matched: &str, zone1: bool) -> Option<String> {
        build_canonical(matched, zone1, DialingTables::standard()).map(|c| c.into_inner())
    }

    #[test]
    fn test_zone1_prefixing() {
        assert_eq!(build("(510)2345678", true).as_deref(), Some("+15102345678"));
        assert_eq!(build("5102345678", true).as_deref(), Some("+15102345678"));
        // Matched text that already carries the 1 only gets a plus
        assert_eq!(build("1234567890", true).as_deref(), Some("+1234567890"));
    }

    #[test]
    fn test_international_two_digit_code() {
        assert_eq!(
            build("+442071234567", false).as_deref(),
            Some("+442071234567")
        );
    }

    #[test]
    fn test_international_three_digit_code() {
        assert_eq!(
            build("+353861234567", false).as_deref(),
            Some("+353861234567")
        );
    }

    #[test]
    fn test_strips_exit_code_debris() {
        // (+44)(0)20... : national zero after the country code
        assert_eq!(
            build("(+44)(0)2071234567", false).as_deref(),
            Some("+442071234567")
        );
        assert_eq!(build("+44012071234567", false).as_deref(), Some("+442071234567"));
    }

    #[test]
    fn test_strips_repeated_country_code() {
        assert_eq!(
            build("+44442071234567", false).as_deref(),
            Some("+442071234567")
        );
        // Only one repeat is removed
        assert_eq!(build("+4444442071", false).as_deref(), Some("+44442071"));
    }

    #[test]
    fn test_rejects_short_national_number() {
        assert_eq!(build("+441234", false), None);
        assert_eq!(build("+4400001111", false), None);
        assert_eq!(build("+4", false), None);
        assert_eq!(build("", true), None);
    }
}
