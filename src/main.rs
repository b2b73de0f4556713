//! Phone Canon - command-line entry point
//!
//! Reads one input per line from stdin and writes one JSON result per line
//! to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use phone_canon::services::ContactRow;
use phone_canon::{
    format, parse_many, CleaningMetrics, Config, ContactValidator, DialingTables, Mode,
    PhoneCleaner,
};
use serde_json::{json, Value};
use std::io::{self, BufRead, BufWriter, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for results)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(mode = %config.mode, style = ?config.style, "Starting phone-canon");

    let metrics = CleaningMetrics::new();
    let tables = DialingTables::standard();
    let cleaner = PhoneCleaner::new(tables, config.style).with_metrics(metrics.clone());
    let validator = ContactValidator::new(tables).with_metrics(metrics.clone());

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let line_no = index + 1;

        let record = match config.mode {
            Mode::Clean => match cleaner.clean_cell(&line) {
                Ok(cleaned) => json!({
                    "input": line,
                    "e164": cleaned.e164,
                    "display": cleaned.display,
                    "needs_review": cleaned.needs_review(),
                }),
                Err(e) => {
                    error!(line = line_no, "Internal formatting failure: {}", e);
                    json!({ "input": line, "error": e.to_string() })
                }
            },
            Mode::Validate => {
                let (phones, errors) = parse_many(&line);
                metrics.record_validated(phones.len());
                metrics.record_rejected(errors.len());
                json!({
                    "input": line,
                    "phones": phones,
                    "errors": errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
                })
            }
            Mode::Format => match format(line.trim(), config.style) {
                Ok(display) => json!({ "input": line, "display": display }),
                Err(e) => {
                    metrics.record_malformed();
                    error!(line = line_no, "Malformed canonical number: {}", e);
                    json!({ "input": line, "error": e.to_string() })
                }
            },
            Mode::Upload => upload_record(&validator, &line, line_no),
        };

        serde_json::to_writer(&mut out, &record).context("failed to write result")?;
        out.write_all(b"\n").context("failed to write result")?;
    }

    out.flush().context("failed to flush stdout")?;

    let summary = metrics.summary();
    info!(
        recognized = summary.recognized_total,
        unmatched = summary.unmatched_total,
        blank = summary.blank_total,
        validated = summary.validated_total,
        rejected = summary.rejected_total,
        malformed = summary.malformed_total,
        "phone-canon finished"
    );

    Ok(())
}

/// Validate one JSON-encoded contact row.
fn upload_record(validator: &ContactValidator<'_>, line: &str, line_no: usize) -> Value {
    if line.trim().is_empty() {
        return json!({ "line": line_no, "skipped": "blank line" });
    }

    let row: ContactRow = match serde_json::from_str(line) {
        Ok(row) => row,
        Err(e) => {
            error!(line = line_no, "Invalid contact row: {}", e);
            return json!({ "line": line_no, "error": e.to_string() });
        }
    };

    let report = validator.validate_row(&row);
    let phone_errors: Vec<String> = report.phone_errors.iter().map(ToString::to_string).collect();
    let email_errors: Vec<String> = report.email_errors.iter().map(ToString::to_string).collect();

    match report.entry() {
        Some(entry) => json!({
            "line": line_no,
            "entry": entry,
            "phone_errors": phone_errors,
            "email_errors": email_errors,
        }),
        None => json!({
            "line": line_no,
            "skipped": report.skip_reason(),
            "phone_errors": phone_errors,
        }),
    }
}
