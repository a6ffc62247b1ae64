//! Metrics report — the single JSON artifact a run produces.
//!
//! The report is constructed once, written to the output path (overwriting),
//! and echoed verbatim to stdout. The wire format is pretty JSON with a
//! four-space indent; the success and error shapes each serialize exactly
//! their own fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Metric label for the one statistic this job reports.
pub const SIGNAL_RATE_METRIC: &str = "signal_rate";

/// Version tag stamped on error reports, where config may not have loaded.
pub const FALLBACK_VERSION: &str = "v1";

/// Errors from the reporting layer.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run status recorded in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

/// The report record, never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsReport {
    pub version: String,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_processed: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl MetricsReport {
    /// Report for a completed run.
    pub fn success(
        version: &str,
        rows_processed: usize,
        signal_rate: f64,
        latency_ms: u64,
        seed: u64,
    ) -> Self {
        Self {
            version: version.to_string(),
            status: RunStatus::Success,
            rows_processed: Some(rows_processed),
            metric: Some(SIGNAL_RATE_METRIC.to_string()),
            value: Some(signal_rate),
            latency_ms: Some(latency_ms),
            seed: Some(seed),
            error_message: None,
        }
    }

    /// Report for a failed run; carries only the version and the error text.
    pub fn failure(version: &str, error: impl fmt::Display) -> Self {
        Self {
            version: version.to_string(),
            status: RunStatus::Error,
            rows_processed: None,
            metric: None,
            value: None,
            latency_ms: None,
            seed: None,
            error_message: Some(error.to_string()),
        }
    }

    /// Serialize with the report's wire format: pretty JSON, 4-space indent.
    pub fn to_json(&self) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
    }
}

/// Write the report to `path` (overwriting) and echo the same JSON to stdout.
pub fn write_report(path: impl AsRef<Path>, report: &MetricsReport) -> Result<(), ReportError> {
    let path = path.as_ref();
    let json = report.to_json()?;
    fs::write(path, &json).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    println!("{json}");
    Ok(())
}
