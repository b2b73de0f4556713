//! Low-level string normalization.
//!
//! Both functions are total: any input string yields an output.

/// Remove every character that is not an ASCII digit.
pub fn strip_non_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Remove whitespace and hyphen-like separators.
///
/// Digits, parentheses, `+`, and any other characters pass through.
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|&c| !is_separator(c)).collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '\u{2010}' | '\u{2011}' | '\u{2013}' | '\u{2014}')
}
