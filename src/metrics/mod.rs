//! Outcome counters for the cleaning and upload pipelines.
//!
//! Cheap to clone; clones share the same counters, so one instance can be
//! handed to several pipeline stages.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for phone-processing outcomes.
#[derive(Debug, Clone, Default)]
pub struct CleaningMetrics {
    /// Cells the recognizer turned into a canonical number
    recognized_total: Arc<AtomicU64>,

    /// Non-blank cells the recognizer could not clean
    unmatched_total: Arc<AtomicU64>,

    /// Blank cells or candidates
    blank_total: Arc<AtomicU64>,

    /// Candidates accepted by the strict validator
    validated_total: Arc<AtomicU64>,

    /// Candidates rejected by the strict validator
    rejected_total: Arc<AtomicU64>,

    /// Canonical values the formatter refused
    malformed_total: Arc<AtomicU64>,
}

impl CleaningMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_recognized(&self) {
        self.recognized_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unmatched(&self) {
        self.unmatched_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_blank(&self) {
        self.blank_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validated(&self, count: usize) {
        self.validated_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_rejected(&self, count: usize) {
        self.rejected_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_malformed(&self) {
        self.malformed_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.recognized_total.store(0, Ordering::Relaxed);
        self.unmatched_total.store(0, Ordering::Relaxed);
        self.blank_total.store(0, Ordering::Relaxed);
        self.validated_total.store(0, Ordering::Relaxed);
        self.rejected_total.store(0, Ordering::Relaxed);
        self.malformed_total.store(0, Ordering::Relaxed);
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            recognized_total: self.recognized_total.load(Ordering::Relaxed),
            unmatched_total: self.unmatched_total.load(Ordering::Relaxed),
            blank_total: self.blank_total.load(Ordering::Relaxed),
            validated_total: self.validated_total.load(Ordering::Relaxed),
            rejected_total: self.rejected_total.load(Ordering::Relaxed),
            malformed_total: self.malformed_total.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub recognized_total: u64,
    pub unmatched_total: u64,
    pub blank_total: u64,
    pub validated_total: u64,
    pub rejected_total: u64,
    pub malformed_total: u64,
}

impl MetricsSummary {
    /// Fraction of non-blank cells the recognizer cleaned (0.0 when none seen).
    pub fn recognition_rate(&self) -> f64 {
        let seen = self.recognized_total + self.unmatched_total;
        if seen == 0 {
            0.0
        } else {
            self.recognized_total as f64 / seen as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_record_and_summary() {
        let metrics = CleaningMetrics::new();
        metrics.record_recognized();
        metrics.record_recognized();
        metrics.record_unmatched();
        metrics.record_blank();
        metrics.record_validated(3);
        metrics.record_rejected(2);
        metrics.record_malformed();

        let summary = metrics.summary();
        assert_eq!(summary.recognized_total, 2);
        assert_eq!(summary.unmatched_total, 1);
        assert_eq!(summary.blank_total, 1);
        assert_eq!(summary.validated_total, 3);
        assert_eq!(summary.rejected_total, 2);
        assert_eq!(summary.malformed_total, 1);
    }

    #[test]
    fn test_metrics_clones_share_counters() {
        let metrics = CleaningMetrics::new();
        let clone = metrics.clone();
        clone.record_recognized();
        assert_eq!(metrics.summary().recognized_total, 1);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = CleaningMetrics::new();
        metrics.record_validated(5);
        metrics.reset();
        assert_eq!(metrics.summary().validated_total, 0);
    }

    #[test]
    fn test_recognition_rate() {
        let metrics = CleaningMetrics::new();
        assert_eq!(metrics.summary().recognition_rate(), 0.0);

        metrics.record_recognized();
        metrics.record_recognized();
        metrics.record_recognized();
        metrics.record_unmatched();
        assert!((metrics.summary().recognition_rate() - 0.75).abs() < f64::EPSILON);
    }
}
