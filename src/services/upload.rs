//! Contact upload: strict per-row validation before records leave for the
//! upload destination.
//!
//! Each row either becomes an [`UploadEntry`] or is skipped with a reason.
//! Per-phone rejections are reported alongside the outcome so an operator
//! can review them, but they never abort the row or the batch.

use crate::domain::{CanonicalNumber, DialingTables, EmailAddress, ValidationError};
use crate::error::PhoneError;
use crate::metrics::CleaningMetrics;
use crate::validator::{parse_emails, parse_many_with};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw contact row as read from the import sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactRow {
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    /// Multi-value phone cell
    pub phones: String,
    /// Multi-value email cell
    pub emails: String,
}

/// A validated contact ready for upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadEntry {
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub phones: Vec<CanonicalNumber>,
    pub emails: Vec<EmailAddress>,
}

/// Why a row was left out of the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No uid; treated as a blank row
    MissingUid,
    /// Neither first nor last name
    MissingName,
    /// No phone survived validation
    NoValidPhones,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUid => write!(f, "missing uid"),
            Self::MissingName => write!(f, "missing name"),
            Self::NoValidPhones => write!(f, "no valid phones"),
        }
    }
}

/// Outcome for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(UploadEntry),
    Skipped(SkipReason),
}

/// Outcome plus the per-candidate problems found along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    pub outcome: RowOutcome,
    pub phone_errors: Vec<PhoneError>,
    pub email_errors: Vec<ValidationError>,
}

impl RowReport {
    fn skipped(reason: SkipReason) -> Self {
        Self {
            outcome: RowOutcome::Skipped(reason),
            phone_errors: Vec::new(),
            email_errors: Vec::new(),
        }
    }

    pub fn entry(&self) -> Option<&UploadEntry> {
        match &self.outcome {
            RowOutcome::Accepted(entry) => Some(entry),
            RowOutcome::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self.outcome {
            RowOutcome::Accepted(_) => None,
            RowOutcome::Skipped(reason) => Some(reason),
        }
    }
}

/// Canonicalize a first/last name pair.
///
/// Both blank yields `None`. When only one is present it is used for both,
/// since the upload destination requires both fields.
pub fn parse_names(first: &str, last: &str) -> Option<(String, String)> {
    match (first.trim(), last.trim()) {
        ("", "") => None,
        (first, "") => Some((first.to_string(), first.to_string())),
        ("", last) => Some((last.to_string(), last.to_string())),
        (first, last) => Some((first.to_string(), last.to_string())),
    }
}

/// Validates contact rows against the strict phone policy.
#[derive(Debug, Clone)]
pub struct ContactValidator<'a> {
    tables: &'a DialingTables,
    metrics: CleaningMetrics,
}

impl Default for ContactValidator<'static> {
    fn default() -> Self {
        Self::new(DialingTables::standard())
    }
}

impl<'a> ContactValidator<'a> {
    pub fn new(tables: &'a DialingTables) -> Self {
        Self {
            tables,
            metrics: CleaningMetrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: CleaningMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &CleaningMetrics {
        &self.metrics
    }

    /// Validate one row.
    pub fn validate_row(&self, row: &ContactRow) -> RowReport {
        let uid = row.uid.trim();
        if uid.is_empty() {
            return RowReport::skipped(SkipReason::MissingUid);
        }

        let Some((first_name, last_name)) = parse_names(&row.first_name, &row.last_name) else {
            return RowReport::skipped(SkipReason::MissingName);
        };

        let (phones, phone_errors) = parse_many_with(&row.phones, self.tables);
        self.metrics.record_validated(phones.len());
        self.metrics.record_rejected(phone_errors.len());
        for (i, e) in phone_errors.iter().enumerate() {
            tracing::debug!(
                uid,
                candidate = i + 1,
                of = phone_errors.len(),
                error = %e,
                "Ignoring phone"
            );
        }

        if phones.is_empty() {
            return RowReport {
                outcome: RowOutcome::Skipped(SkipReason::NoValidPhones),
                phone_errors,
                email_errors: Vec::new(),
            };
        }

        let (emails, email_errors) = parse_emails(&row.emails);

        RowReport {
            outcome: RowOutcome::Accepted(UploadEntry {
                uid: uid.to_string(),
                first_name,
                last_name,
                phones,
                emails,
            }),
            phone_errors,
            email_errors,
        }
    }

    /// Validate a batch, returning the accepted entries and every report.
    pub fn validate_rows<'r>(
        &self,
        rows: impl IntoIterator<Item = &'r ContactRow>,
    ) -> (Vec<UploadEntry>, Vec<RowReport>) {
        let reports: Vec<RowReport> = rows.into_iter().map(|row| self.validate_row(row)).collect();
        let entries = reports
            .iter()
            .filter_map(|report| report.entry().cloned())
            .collect();
        (entries, reports)
    }
}
