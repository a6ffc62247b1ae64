//! Job orchestration — config to report, with a single error boundary.
//!
//! The pipeline is strictly sequential: config → data → signal → report.
//! The first failing step short-circuits to the error path, which writes an
//! error report and logs the failure. No step retries or recovers, and no
//! partial metrics are ever reported as success.

use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;
use tracing::{error, info};

use siglab_core::{compute_signal, RunRng};

use crate::config::{ConfigError, RunConfig};
use crate::data_loader::{load_table, LoadError};
use crate::report::{write_report, MetricsReport, ReportError, FALLBACK_VERSION};

/// Paths for a single run.
#[derive(Debug, Clone)]
pub struct JobOptions {
    pub input: PathBuf,
    pub config: PathBuf,
    pub output: PathBuf,
}

/// Errors from individual pipeline steps.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("data error: {0}")]
    Data(#[from] LoadError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

/// Errors escaping `run_job`.
#[derive(Debug, Error)]
pub enum JobError {
    /// A pipeline step failed; the error report is on disk and logged.
    #[error("job failed: {0}")]
    Run(RunError),

    /// The error-path report itself could not be written.
    #[error("failed to write error report: {0}")]
    ErrorReportWrite(ReportError),
}

/// Run the whole job: load, compute, report.
///
/// On success the report has been written and echoed, and is returned. On
/// pipeline failure an error report is written first, then the failure comes
/// back as `JobError::Run`; if writing that report fails too, the write
/// error wins as `JobError::ErrorReportWrite`.
pub fn run_job(opts: &JobOptions) -> Result<MetricsReport, JobError> {
    let start = Instant::now();
    info!("Job started");

    match run_pipeline(opts, start) {
        Ok(report) => {
            info!("Job completed successfully");
            Ok(report)
        }
        Err(err) => {
            let report = MetricsReport::failure(FALLBACK_VERSION, &err);
            write_report(&opts.output, &report).map_err(JobError::ErrorReportWrite)?;
            error!("Job failed: {err}");
            Err(JobError::Run(err))
        }
    }
}

fn run_pipeline(opts: &JobOptions, start: Instant) -> Result<MetricsReport, RunError> {
    let config = RunConfig::from_file(&opts.config)?;
    info!(
        "Config loaded: seed={} window={} version={}",
        config.seed, config.window, config.version
    );
    let rng = RunRng::new(config.seed);

    let table = load_table(&opts.input)?;
    info!("Rows loaded: {}", table.len());

    let signals = compute_signal(table, config.window);
    info!("Rolling mean and signal computed");

    let signal_rate = signals.signal_rate();
    let latency_ms = start.elapsed().as_millis() as u64;
    let report = MetricsReport::success(
        &config.version,
        signals.len(),
        signal_rate,
        latency_ms,
        rng.seed(),
    );
    write_report(&opts.output, &report)?;

    Ok(report)
}
