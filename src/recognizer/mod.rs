//! Lenient recognizer for messy, human-entered phone numbers.
//!
//! The recognizer walks an ordered cascade of pattern rules and hands the
//! first match to the canonical-form builder. It never errors: `None` means
//! "could not be cleaned, keep the original text for manual review".

pub mod rules;

pub use rules::{Extract, Rule, RuleInput, CASCADE};

use crate::builder::build_canonical;
use crate::domain::{CanonicalNumber, DialingTables};
use crate::normalize::strip_separators;

/// Cascade runner bound to a set of dialing tables.
#[derive(Debug, Clone, Copy)]
pub struct Recognizer<'a> {
    tables: &'a DialingTables,
}

impl Default for Recognizer<'static> {
    fn default() -> Self {
        Self::new(DialingTables::standard())
    }
}

impl<'a> Recognizer<'a> {
    /// Create a recognizer that consults the given tables.
    pub fn new(tables: &'a DialingTables) -> Self {
        Self { tables }
    }

    /// The rule names in the order they are tried.
    pub fn rule_names() -> Vec<&'static str> {
        CASCADE.iter().map(|rule| rule.name).collect()
    }

    /// Extract a single canonical number from `raw`.
    ///
    /// The first rule that matches decides the outcome, even when the
    /// builder then rejects the fragment; later rules are not consulted.
    pub fn recognize(&self, raw: &str) -> Option<CanonicalNumber> {
        let stripped = strip_separators(raw);

        for rule in CASCADE.iter() {
            let text = match rule.input {
                RuleInput::Raw => raw,
                RuleInput::Stripped if stripped.is_empty() => return None,
                RuleInput::Stripped => stripped.as_str(),
            };

            if let Some(fragment) = rule.apply(text) {
                let result = build_canonical(fragment, rule.zone1, self.tables);
                tracing::trace!(
                    rule = rule.name,
                    fragment,
                    accepted = result.is_some(),
                    "Cascade rule matched"
                );
                return result;
            }
        }

        tracing::trace!("No cascade rule matched");
        None
    }
}

/// Recognize `raw` with the standard dialing tables.
pub fn recognize(raw: &str) -> Option<CanonicalNumber> {
    Recognizer::default().recognize(raw)
}

/// Recognize `raw` with caller-supplied dialing tables.
pub fn recognize_with(raw: &str, tables: &DialingTables) -> Option<CanonicalNumber> {
    Recognizer::new(tables).recognize(raw)
}
