//! Siglab CLI — one-shot signal job: CSV prices in, JSON metrics report out.
//!
//! Exit codes: 0 on success, 1 on any pipeline failure (the error report is
//! written before exiting). A failure while writing the error report itself
//! propagates out of `main`.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use siglab_runner::init_file_logging;
use siglab_runner::runner::{run_job, JobError, JobOptions};

#[derive(Parser)]
#[command(
    name = "siglab",
    about = "Moving-average signal job: CSV prices in, JSON metrics report out"
)]
struct Cli {
    /// Input CSV of prices; must contain a `close` column.
    #[arg(long)]
    input: PathBuf,

    /// YAML config with `seed`, `window`, and `version`.
    #[arg(long)]
    config: PathBuf,

    /// Output path for the JSON metrics report.
    #[arg(long)]
    output: PathBuf,

    /// Log file; one line per event, appended.
    #[arg(long)]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_file_logging(&cli.log_file)?;

    let opts = JobOptions {
        input: cli.input,
        config: cli.config,
        output: cli.output,
    };

    match run_job(&opts) {
        Ok(_) => Ok(()),
        // The error report is already on disk and logged; only the exit
        // code is left to signal.
        Err(JobError::Run(_)) => process::exit(1),
        Err(err @ JobError::ErrorReportWrite(_)) => Err(err.into()),
    }
}
