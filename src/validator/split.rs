//! Multi-value cell splitting.

/// Separators between phone numbers in one cell.
pub const PHONE_SEPARATORS: &[char] = &[',', ';', '/', '|'];

/// Separators between email addresses in one cell. `/` is legal in an
/// address local part, so it is not a separator here.
pub const EMAIL_SEPARATORS: &[char] = &[',', ';', '|'];

/// Split `raw` on any of `separators`, yielding trimmed, non-blank pieces
/// in input order.
pub fn split_candidates<'a>(
    raw: &'a str,
    separators: &'a [char],
) -> impl Iterator<Item = &'a str> + 'a {
    raw.split(separators)
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
}
