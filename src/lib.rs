//! Phone Canon - a phone-number canonicalization engine for messy contact data.
//!
//! Turns human-entered phone strings from spreadsheets and CSV exports into
//! one canonical `+<country code><number>` form, and renders canonical
//! numbers back into plain or HTML-safe display forms.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`CanonicalNumber`, `EmailAddress`) and the dialing tables
//! - **normalize**: Digit and separator stripping
//! - **recognizer**: Lenient ordered pattern cascade; never errors
//! - **builder**: Canonical-form assembly shared by the cascade
//! - **formatter**: Display forms, plain and HTML
//! - **validator**: Strict per-candidate validation with typed errors, plus batch splitting
//! - **services**: Spreadsheet cleaning and contact-upload pipelines
//! - **metrics**: Outcome counters for the pipelines
//! - **config**: Configuration for the binary from environment variables
//! - **error**: Custom error types for precise error handling
//!
//! # Example
//!
//! ```
//! use phone_canon::{canonicalize, format_plain, recognize, PhoneError};
//!
//! let clean = recognize("(510) (510) 234-5678").unwrap();
//! assert_eq!(clean.as_str(), "+15102345678");
//! assert_eq!(format_plain(clean.as_str()).unwrap(), "(510) 234-5678");
//!
//! assert!(matches!(canonicalize("555-1234"), Err(PhoneError::TooFewDigits(_))));
//! ```

pub mod builder;
pub mod config;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod metrics;
pub mod normalize;
pub mod recognizer;
pub mod services;
pub mod validator;

pub use builder::build_canonical;
pub use config::{Config, Mode};
pub use domain::{CanonicalNumber, DialingTables, EmailAddress, ValidationError};
pub use error::{ConfigError, FormatError, PhoneError};
pub use formatter::{format, format_html, format_plain, format_with, DisplayStyle};
pub use metrics::{CleaningMetrics, MetricsSummary};
pub use normalize::{strip_non_digits, strip_separators};
pub use recognizer::{recognize, recognize_with, Recognizer};
pub use services::{CleanedPhone, ContactRow, ContactValidator, PhoneCleaner, RowReport};
pub use validator::{canonicalize, canonicalize_with, parse_emails, parse_many, parse_many_with};
