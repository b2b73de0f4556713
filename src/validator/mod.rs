//! Strict validator for the contact-upload path.
//!
//! Unlike the recognizer, every rejection here is an explicit
//! [`PhoneError`]. The acceptance rules track what the upload destination
//! will take: local numbers need ten digits, a geographic area code, and an
//! exchange code that does not start with `0` or `1`.

pub mod split;

pub use split::{split_candidates, EMAIL_SEPARATORS, PHONE_SEPARATORS};

use crate::domain::{CanonicalNumber, DialingTables, EmailAddress, ValidationError};
use crate::error::{PhoneError, PhoneResult};
use crate::normalize::strip_non_digits;

/// International access code that stands in for a leading `+`.
const EXIT_CODE: &str = "011";

/// Longest unprefixed digit run still treated as a local number.
const MAX_LOCAL_DIGITS: usize = 10;

/// Number classification after prefix inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberClass {
    /// North American (`+1`).
    Local,
    /// Anything else.
    International,
}

/// Validate and canonicalize one candidate with the standard tables.
///
/// # Errors
///
/// - `PhoneError::NoContent` for blank input
/// - `PhoneError::TooFewDigits` for local numbers short of ten digits
/// - `PhoneError::NonGeographicAreaCode` for reserved 5XX area codes
/// - `PhoneError::InvalidPrefix` when the exchange code starts with 0 or 1
pub fn canonicalize(raw: &str) -> PhoneResult<CanonicalNumber> {
    canonicalize_with(raw, DialingTables::standard())
}

/// Validate and canonicalize one candidate with caller-supplied tables.
pub fn canonicalize_with(raw: &str, tables: &DialingTables) -> PhoneResult<CanonicalNumber> {
    let number = raw.trim();
    if number.is_empty() {
        return Err(PhoneError::NoContent);
    }

    let mut digits = strip_non_digits(number);
    let explicit_plus = if number.starts_with('+') {
        true
    } else if digits.starts_with(EXIT_CODE) {
        digits.drain(..EXIT_CODE.len());
        true
    } else {
        false
    };

    let (class, prefix, national) = if explicit_plus {
        match digits.strip_prefix('1') {
            Some(rest) => (NumberClass::Local, "+1", rest),
            None => (NumberClass::International, "+", digits.as_str()),
        }
    } else if digits.len() > MAX_LOCAL_DIGITS {
        (NumberClass::International, "+", digits.as_str())
    } else {
        (NumberClass::Local, "+1", digits.as_str())
    };

    if class == NumberClass::Local {
        check_local(raw, national, tables)?;
    } else if national.is_empty() {
        return Err(PhoneError::TooFewDigits(raw.to_string()));
    }

    Ok(CanonicalNumber::from_parts(prefix, national))
}

fn check_local(raw: &str, national: &str, tables: &DialingTables) -> PhoneResult<()> {
    if national.len() < MAX_LOCAL_DIGITS {
        return Err(PhoneError::TooFewDigits(raw.to_string()));
    }
    if tables.is_non_geographic_area_code(&national[..3]) {
        return Err(PhoneError::NonGeographicAreaCode(raw.to_string()));
    }
    // Exchange codes never start with 0 or 1
    if matches!(national.as_bytes()[3], b'0' | b'1') {
        return Err(PhoneError::InvalidPrefix(raw.to_string()));
    }
    Ok(())
}

/// Validate every phone in a multi-value cell (split on `,` `;` `/` `|`).
///
/// Returns the accepted numbers and one error per rejected candidate, both
/// in input order. Blank candidates are dropped silently.
pub fn parse_many(raw: &str) -> (Vec<CanonicalNumber>, Vec<PhoneError>) {
    parse_many_with(raw, DialingTables::standard())
}

/// [`parse_many`] with caller-supplied tables.
pub fn parse_many_with(
    raw: &str,
    tables: &DialingTables,
) -> (Vec<CanonicalNumber>, Vec<PhoneError>) {
    let mut phones = Vec::new();
    let mut errors = Vec::new();

    for candidate in split_candidates(raw, PHONE_SEPARATORS) {
        match canonicalize_with(candidate, tables) {
            Ok(phone) => phones.push(phone),
            Err(PhoneError::NoContent) => {}
            Err(e) => {
                tracing::debug!(candidate, error = %e, "Rejected phone candidate");
                errors.push(e);
            }
        }
    }

    (phones, errors)
}

/// Validate every email in a multi-value cell (split on `,` `;` `|`).
pub fn parse_emails(raw: &str) -> (Vec<EmailAddress>, Vec<ValidationError>) {
    let mut emails = Vec::new();
    let mut errors = Vec::new();

    for candidate in split_candidates(raw, EMAIL_SEPARATORS) {
        match EmailAddress::parse(candidate) {
            Ok(email) => emails.push(email),
            Err(ValidationError::Blank) => {}
            Err(e) => {
                tracing::debug!(candidate, error = %e, "Rejected email candidate");
                errors.push(e);
            }
        }
    }

    (emails, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(raw: &str) -> PhoneResult<String> {
        canonicalize(raw).map(|c| c.into_inner())
    }

    #[test]
    fn test_local_number() {
        assert_eq!(canon("510-234-5678"), Ok("+15102345678".to_string()));
        assert_eq!(canon(" (510) 234 5678 "), Ok("+15102345678".to_string()));
    }

    #[test]
    fn test_explicit_plus_one() {
        assert_eq!(canon("+1 510 234 5678"), Ok("+15102345678".to_string()));
    }

    #[test]
    fn test_explicit_international() {
        assert_eq!(canon("+44 20 7123 4567"), Ok("+442071234567".to_string()));
    }

    #[test]
    fn test_exit_code_becomes_plus() {
        assert_eq!(canon("011 44 20 7123 4567"), Ok("+442071234567".to_string()));
        assert_eq!(canon("011-1-510-234-5678"), Ok("+15102345678".to_string()));
    }

    #[test]
    fn test_long_unprefixed_is_international() {
        assert_eq!(canon("442071234567"), Ok("+442071234567".to_string()));
    }

    #[test]
    fn test_too_few_digits() {
        assert_eq!(
            canon("555-1234"),
            Err(PhoneError::TooFewDigits("555-1234".to_string()))
        );
        assert!(matches!(
            canon("+1 510 234 567"),
            Err(PhoneError::TooFewDigits(_))
        ));
    }

    #[test]
    fn test_invalid_prefix() {
        assert_eq!(
            canon("510-023-4567"),
            Err(PhoneError::InvalidPrefix("510-023-4567".to_string()))
        );
        assert!(matches!(
            canon("510-123-4567"),
            Err(PhoneError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_non_geographic_area_code() {
        assert_eq!(
            canon("500-123-4567"),
            Err(PhoneError::NonGeographicAreaCode("500-123-4567".to_string()))
        );
        assert!(matches!(
            canon("+1 555 234 5678"),
            Err(PhoneError::NonGeographicAreaCode(_))
        ));
    }

    #[test]
    fn test_blank_is_no_content() {
        assert_eq!(canon(""), Err(PhoneError::NoContent));
        assert_eq!(canon("   "), Err(PhoneError::NoContent));
        assert_eq!(canon("\t\n"), Err(PhoneError::NoContent));
    }

    #[test]
    fn test_digitless_text_is_too_few_digits() {
        assert_eq!(
            canon("not-a-phone"),
            Err(PhoneError::TooFewDigits("not-a-phone".to_string()))
        );
        assert!(matches!(canon("+"), Err(PhoneError::TooFewDigits(_))));
        assert!(matches!(canon("011"), Err(PhoneError::TooFewDigits(_))));
    }

    #[test]
    fn test_parse_many_mixed() {
        let (phones, errors) = parse_many("510-234-5678; not-a-phone; 442071234567");
        let phones: Vec<&str> = phones.iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["+15102345678", "+442071234567"]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].input(), Some("not-a-phone"));
    }

    #[test]
    fn test_parse_many_drops_blanks() {
        let (phones, errors) = parse_many("510-234-5678,, ;/ |415-555-0123");
        assert_eq!(phones.len(), 2);
        assert!(errors.is_empty());

        let (phones, errors) = parse_many("   ");
        assert!(phones.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_emails() {
        let (emails, errors) = parse_emails("a@example.com; ; Bo <bo@example.org> | nope");
        let emails: Vec<&str> = emails.iter().map(|e| e.as_str()).collect();
        assert_eq!(emails, vec!["a@example.com", "bo@example.org"]);
        assert_eq!(errors, vec![ValidationError::InvalidEmail("nope".to_string())]);
    }

    #[test]
    fn test_emails_do_not_split_on_slash() {
        let (emails, errors) = parse_emails("a/b@example.com");
        assert_eq!(emails.len(), 1);
        assert!(errors.is_empty());
    }
}
