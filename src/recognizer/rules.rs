//! The ordered rule table for the lenient recognizer.
//!
//! Order is load-bearing: several rules can match the same cleaned string
//! with different results, and the first match wins. All patterns use
//! `[0-9]` rather than `\d` so only ASCII digits count.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Which form of the input a rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleInput {
    /// The untouched cell text.
    Raw,
    /// The cell text after `strip_separators`.
    Stripped,
}

/// How a rule turns its captures into the fragment handed to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// Take this capture group.
    Group(usize),
    /// Take `keep` only when groups `first` and `second` are textually equal.
    Repeated {
        first: usize,
        second: usize,
        keep: usize,
    },
}

/// One entry in the cascade.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub input: RuleInput,
    pub zone1: bool,
    pub extract: Extract,
    pattern: Regex,
}

impl Rule {
    fn new(
        name: &'static str,
        input: RuleInput,
        zone1: bool,
        extract: Extract,
        pattern: &str,
    ) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Failed to compile cascade rule {name}: {e}"));
        Self {
            name,
            input,
            zone1,
            extract,
            pattern,
        }
    }

    /// The fragment this rule extracts from `text`, if it applies.
    pub fn apply<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = self.pattern.captures(text)?;
        match self.extract {
            Extract::Group(group) => group_str(&caps, group),
            Extract::Repeated {
                first,
                second,
                keep,
            } => {
                if group_str(&caps, first)? == group_str(&caps, second)? {
                    group_str(&caps, keep)
                } else {
                    None
                }
            }
        }
    }
}

fn group_str<'t>(caps: &Captures<'t>, group: usize) -> Option<&'t str> {
    caps.get(group).map(|m| m.as_str())
}

use Extract::{Group, Repeated};
use RuleInput::{Raw, Stripped};

const DOUBLED: Extract = Repeated {
    first: 1,
    second: 3,
    keep: 2,
};

/// The cascade, most specific rule first.
pub static CASCADE: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // (510) 234-5678 with anything after it
        Rule::new(
            "zone1_number_front",
            Raw,
            true,
            Group(1),
            r"^\s*(\([0-9]{3}\)\s*[0-9]{3}(?:\s*-?\s*)[0-9]{4})(?:[^0-9]|$)",
        ),
        // (+1)(510)2345678, (001)(510)2345678
        Rule::new(
            "zone1_plus1",
            Stripped,
            true,
            Group(1),
            r"^\(\+?0?0?1\)(\([0-9]{3}\)[0-9]{3}[0-9]{4})(?:[^0-9]|$)",
        ),
        // (510)(234)5678
        Rule::new(
            "zone1_area_exchange",
            Stripped,
            true,
            Group(1),
            r"^(\([0-9]{3}\)\([0-9]{3}\)[0-9]{4})(?:[^0-9]|$)",
        ),
        // (510)(510)2345678
        Rule::new(
            "zone1_double_area",
            Stripped,
            true,
            DOUBLED,
            r"^\(([0-9]{3})\)(\(([0-9]{3})\)[0-9]{3}[0-9]{4})(?:[^0-9]|$)",
        ),
        // (510)(94612)(510)2345678
        Rule::new(
            "zone1_area_zip_area",
            Stripped,
            true,
            DOUBLED,
            r"^\(([0-9]{3})\)\([0-9]{5}\)(?:\+?0?0?1)?(\(?([0-9]{3})\)?[0-9]{3}[0-9]{4})(?:[^0-9]|$)",
        ),
        // (+1)(94612)5102345678
        Rule::new(
            "zone1_plus1_zip",
            Stripped,
            true,
            Group(1),
            r"^\(\+?0?0?1\)\([0-9]{5}\)(?:\+?0?0?1)?(\(?[0-9]{3}\)?[0-9]{3}[0-9]{4})(?:[^0-9]|$)",
        ),
        // (94612)(510)2345678
        Rule::new(
            "zone1_zip_front",
            Stripped,
            true,
            Group(1),
            r"^\([0-9]{5}\)(\([0-9]{3}\)[0-9]{3}[0-9]{4})(?:[^0-9]|$)",
        ),
        // (94612)(94610)5102345678
        Rule::new(
            "zone1_zip_double",
            Stripped,
            true,
            Group(1),
            r"^\([0-9]{5}\)\([0-9]{5}\)(?:\+?0?0?1)?(\(?[0-9]{3}\)?[0-9]{3}[0-9]{4})(?:[^0-9]|$)",
        ),
        // 5102345678, +15102345678
        Rule::new(
            "zone1_digits_only",
            Stripped,
            true,
            Group(1),
            r"^(?:\+?1)?(\(?[0-9]{3}\)?[0-9]{7})(?:[^0-9]|$)",
        ),
        // (+1)(1)5102345678, (01)(510)5102345678
        Rule::new(
            "zone1_area_ten_digits",
            Stripped,
            true,
            Group(1),
            r"^\([0+]?0?1?\)\((?:1|[0-9]{3})\)([0-9]{10})(?:[^0-9]|$)",
        ),
        // +442071234567, (+44)(0)2071234567
        Rule::new(
            "intl_plus",
            Stripped,
            false,
            Group(1),
            r"(^\(?\+0?0?[2-9][0-9][0-9]?\)?\(?[0-9]+\)?[0-9]+)(?:[^0-9]|$)",
        ),
        // (33)612345678
        Rule::new(
            "intl_parenthesized",
            Stripped,
            false,
            Group(1),
            r"(^\([2-9][0-9][0-9]?\)\(?[0-9]+\)?[0-9]+)(?:[^0-9]|$)",
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static Rule {
        CASCADE
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no rule {name}"))
    }

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(CASCADE.len(), 12);
        assert_eq!(CASCADE[0].input, RuleInput::Raw);
        assert!(CASCADE[1..].iter().all(|r| r.input == RuleInput::Stripped));
    }

    #[test]
    fn test_zone1_rules_precede_international() {
        let first_intl = CASCADE.iter().position(|r| !r.zone1).unwrap();
        assert!(CASCADE[first_intl..].iter().all(|r| !r.zone1));
    }

    #[test]
    fn test_doubled_area_requires_equal_codes() {
        let r = rule("zone1_double_area");
        assert_eq!(r.apply("(510)(510)2345678"), Some("(510)2345678"));
        assert_eq!(r.apply("(510)(511)2345678"), None);
    }

    #[test]
    fn test_area_zip_area_requires_equal_codes() {
        let r = rule("zone1_area_zip_area");
        assert_eq!(r.apply("(510)(94612)(510)2345678"), Some("(510)2345678"));
        assert_eq!(r.apply("(510)(94612)+1(510)2345678"), Some("(510)2345678"));
        assert_eq!(r.apply("(510)(94612)(415)2345678"), None);
    }

    #[test]
    fn test_rules_require_terminator() {
        let r = rule("zone1_digits_only");
        assert_eq!(r.apply("5102345678"), Some("5102345678"));
        assert_eq!(r.apply("5102345678/4152345678"), Some("5102345678"));
        assert_eq!(r.apply("51023456789"), None);
    }

    #[test]
    fn test_number_front_tolerates_spacing() {
        let r = rule("zone1_number_front");
        assert_eq!(r.apply("  (510) 234 - 5678 home"), Some("(510) 234 - 5678"));
        assert_eq!(r.apply("(510)2345678"), Some("(510)2345678"));
        assert_eq!(r.apply("cell (510) 234-5678"), None);
    }
}
