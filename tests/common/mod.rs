//! Shared fixtures for integration tests.

#![allow(dead_code)]

/// Canonical numbers that satisfy every shape rule.
pub const VALID_CANONICALS: &[&str] = &[
    "+15102345678",
    "+14155550123",
    "+12125551234",
    "+442071234567",
    "+33612345678",
    "+353861234567",
    "+5215512345678",
    "+861012345678",
];

/// Messy spreadsheet cells and what the recognizer makes of them.
pub const MESSY_INPUTS: &[(&str, &str)] = &[
    ("(510) 234-5678", "+15102345678"),
    ("(510) 234-5678 (cell, after 5)", "+15102345678"),
    ("(+1) (510) 234 5678", "+15102345678"),
    ("(510)(234)5678", "+15102345678"),
    ("(510) (510) 234-5678", "+15102345678"),
    ("(510) (94612) (510) 234-5678", "+15102345678"),
    ("(+1) (94612) 510-234-5678", "+15102345678"),
    ("(94612) (510) 234-5678", "+15102345678"),
    ("(94612) (94610) 510 234 5678", "+15102345678"),
    ("510–234–5678", "+15102345678"),
    ("+1 510 234 5678", "+15102345678"),
    ("(+1)(1)5102345678", "+15102345678"),
    ("+44 20 7123 4567", "+442071234567"),
    ("(+44) (0) 20 7123 4567", "+442071234567"),
    ("+44 (0) 20 7123 4567", "+442071234567"),
    ("(33) 6 12 34 56 78", "+33612345678"),
];
