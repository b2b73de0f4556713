//! Domain value objects and lookup tables.
//!
//! This module contains type-safe wrappers for canonical phone numbers and
//! email addresses, plus the fixed dialing tables every stage of the engine
//! consults. Value objects validate at construction time so invalid data
//! cannot be represented past the parsing boundary.

pub mod canonical;
pub mod email;
pub mod errors;
pub mod tables;

pub use canonical::CanonicalNumber;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use tables::{DialingTables, NON_GEOGRAPHIC_AREA_CODES, TWO_DIGIT_COUNTRY_CODES};
