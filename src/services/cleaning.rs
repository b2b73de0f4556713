//! Spreadsheet cleaning: best-effort phone cleanup for legacy records.
//!
//! Uses the lenient recognizer. A cell that cannot be cleaned keeps its
//! original text in the display column with an empty canonical column so
//! someone can fix it by hand.

use crate::domain::DialingTables;
use crate::error::FormatResult;
use crate::formatter::{format_with, DisplayStyle};
use crate::metrics::CleaningMetrics;
use crate::recognizer::Recognizer;
use serde::Serialize;

/// The two output columns for one phone cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedPhone {
    /// Canonical number, or empty when the cell could not be cleaned
    pub e164: String,

    /// Display form, or the original cell text when it could not be cleaned
    pub display: String,
}

impl CleanedPhone {
    fn uncleaned(original: &str) -> Self {
        Self {
            e164: String::new(),
            display: original.to_string(),
        }
    }

    /// True when the cell should be flagged for manual review.
    pub fn needs_review(&self) -> bool {
        self.e164.is_empty() && !self.display.trim().is_empty()
    }
}

/// Cleans phone cells and keeps outcome counts.
#[derive(Debug, Clone)]
pub struct PhoneCleaner<'a> {
    recognizer: Recognizer<'a>,
    tables: &'a DialingTables,
    style: DisplayStyle,
    metrics: CleaningMetrics,
}

impl Default for PhoneCleaner<'static> {
    fn default() -> Self {
        Self::new(DialingTables::standard(), DisplayStyle::Plain)
    }
}

impl<'a> PhoneCleaner<'a> {
    pub fn new(tables: &'a DialingTables, style: DisplayStyle) -> Self {
        Self {
            recognizer: Recognizer::new(tables),
            tables,
            style,
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

    /// Clean one cell.
    ///
    /// # Errors
    ///
    /// `FormatError` when the recognizer produced a canonical number the
    /// formatter refuses; that is an engine defect, not bad input.
    pub fn clean_cell(&self, raw: &str) -> FormatResult<CleanedPhone> {
        if raw.trim().is_empty() {
            self.metrics.record_blank();
            return Ok(CleanedPhone::uncleaned(raw));
        }

        let Some(canonical) = self.recognizer.recognize(raw) else {
            self.metrics.record_unmatched();
            tracing::debug!(cell = raw, "Phone cell left for manual review");
            return Ok(CleanedPhone::uncleaned(raw));
        };

        let display = format_with(canonical.as_str(), self.style, self.tables).map_err(|e| {
            self.metrics.record_malformed();
            tracing::warn!(cell = raw, canonical = %canonical, error = %e, "Cleaned phone failed to format");
            e
        })?;

        self.metrics.record_recognized();
        Ok(CleanedPhone {
            e164: canonical.into_inner(),
            display,
        })
    }

    /// Clean a primary phone column with a fallback column.
    ///
    /// The fallback (for example an "outside of US" column) is consulted
    /// only when the primary cell produced no canonical number.
    pub fn clean_columns(&self, primary: &str, fallback: &str) -> FormatResult<CleanedPhone> {
        let cleaned = self.clean_cell(primary)?;
        if !cleaned.e164.is_empty() || fallback.trim().is_empty() {
            return Ok(cleaned);
        }
        self.clean_cell(fallback)
    }
}

/// Clean one cell with the standard tables and plain display style.
pub fn clean_phone_cell(raw: &str) -> FormatResult<CleanedPhone> {
    PhoneCleaner::default().clean_cell(raw)
}

/// Clean a primary/fallback pair with the standard tables.
pub fn clean_phone_columns(primary: &str, fallback: &str) -> FormatResult<CleanedPhone> {
    PhoneCleaner::default().clean_columns(primary, fallback)
}
