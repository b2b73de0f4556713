//! Caller pipelines built on the engine.
//!
//! - **cleaning**: lenient, best-effort cleanup of spreadsheet phone cells
//! - **upload**: strict validation of contact rows bound for upload

pub mod cleaning;
pub mod upload;

pub use cleaning::{clean_phone_cell, clean_phone_columns, CleanedPhone, PhoneCleaner};
pub use upload::{
    parse_names, ContactRow, ContactValidator, RowOutcome, RowReport, SkipReason, UploadEntry,
};
