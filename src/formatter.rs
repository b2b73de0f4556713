//! Display formatter: renders canonical numbers for people.
//!
//! The country-code split is re-derived from the canonical string with the
//! same tables the builder uses; nothing about the split is stored.

use crate::domain::DialingTables;
use crate::error::{FormatError, FormatResult};

/// Output flavor for [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStyle {
    /// Plain ASCII: `(510) 234-5678`, `(+44) 207-123-4567`.
    #[default]
    Plain,
    /// HTML-safe: non-breaking space and non-breaking hyphen entities.
    Html,
}

impl DisplayStyle {
    fn space(self) -> &'static str {
        match self {
            Self::Plain => " ",
            Self::Html => "&nbsp;",
        }
    }

    fn hyphen(self) -> &'static str {
        match self {
            Self::Plain => "-",
            Self::Html => "&#8209;",
        }
    }
}

impl From<bool> for DisplayStyle {
    /// `true` selects [`DisplayStyle::Html`].
    fn from(html: bool) -> Self {
        if html {
            Self::Html
        } else {
            Self::Plain
        }
    }
}

const ZONE1_LEN: usize = 12;
const INTL_MIN_LEN: usize = 10;
const INTL_MAX_LEN: usize = 16;

/// Format with the standard dialing tables.
pub fn format(canonical: &str, style: DisplayStyle) -> FormatResult<String> {
    format_with(canonical, style, DialingTables::standard())
}

/// Shorthand for `format(canonical, DisplayStyle::Plain)`.
pub fn format_plain(canonical: &str) -> FormatResult<String> {
    format(canonical, DisplayStyle::Plain)
}

/// Shorthand for `format(canonical, DisplayStyle::Html)`.
pub fn format_html(canonical: &str) -> FormatResult<String> {
    format(canonical, DisplayStyle::Html)
}

/// Render a canonical number for display.
///
/// Zone 1 numbers must be exactly `+1` plus 10 digits and render as
/// `(AAA) NNN-NNNN`. Any other `+` number must be 10 to 16 characters long
/// and renders as `(+CC) ` followed by the national digits grouped in
/// threes from the right, with a trailing group of four when the digit
/// count leaves a remainder of one.
///
/// # Errors
///
/// `FormatError::MalformedCanonical` if the value breaks its shape rules.
pub fn format_with(
    canonical: &str,
    style: DisplayStyle,
    tables: &DialingTables,
) -> FormatResult<String> {
    let Some(digits) = canonical.strip_prefix('+') else {
        return Err(FormatError::malformed(canonical, "no leading +"));
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::malformed(canonical, "non-digit after +"));
    }

    if let Some(national) = digits.strip_prefix('1') {
        if canonical.len() != ZONE1_LEN {
            return Err(FormatError::malformed(
                canonical,
                format!("zone 1 length {}", canonical.len()),
            ));
        }
        return Ok(format!(
            "({}){}{}{}{}",
            &national[..3],
            style.space(),
            &national[3..6],
            style.hyphen(),
            &national[6..]
        ));
    }

    if !(INTL_MIN_LEN..=INTL_MAX_LEN).contains(&canonical.len()) {
        return Err(FormatError::malformed(
            canonical,
            format!("international length {}", canonical.len()),
        ));
    }

    let (country_code, national) = tables
        .split_country_code(digits)
        .ok_or_else(|| FormatError::malformed(canonical, "no country code"))?;

    Ok(format!(
        "(+{}){}{}",
        country_code,
        style.space(),
        group_digits(national, style.hyphen())
    ))
}

/// Group digits in threes aligned to the right end, keeping a final group
/// of four when `len % 3 == 1`.
fn group_digits(digits: &str, sep: &str) -> String {
    let (head, tail) = if digits.len() % 3 == 1 && digits.len() >= 4 {
        digits.split_at(digits.len() - 4)
    } else {
        (digits, "")
    };

    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 2);
    let lead = head.len() % 3;
    if lead > 0 {
        groups.push(&head[..lead]);
    }
    let mut i = lead;
    while i < head.len() {
        groups.push(&head[i..i + 3]);
        i += 3;
    }
    if !tail.is_empty() {
        groups.push(tail);
    }

    groups.join(sep)
}
