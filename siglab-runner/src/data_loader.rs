//! CSV loading for the job — existence, emptiness, and schema checks.
//!
//! Checks run in the same order as the rest of the pipeline expects them:
//! path existence, then emptiness, then the `close` column. Every other
//! column passes through unexamined.

use csv::ReaderBuilder;
use siglab_core::PriceTable;
use std::path::Path;
use thiserror::Error;

/// The one column the signal computation interprets.
const CLOSE_COLUMN: &str = "close";

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {0}")]
    NotFound(String),

    #[error("input CSV has no data rows")]
    Empty,

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: cannot parse close value '{value}' as a number")]
    ParseClose { row: usize, value: String },
}

/// Load and validate the price table from `path`.
pub fn load_table(path: impl AsRef<Path>) -> Result<PriceTable, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.push(record.iter().map(str::to_string).collect());
    }
    if cells.is_empty() {
        return Err(LoadError::Empty);
    }

    let close_idx = columns
        .iter()
        .position(|name| name == CLOSE_COLUMN)
        .ok_or(LoadError::MissingColumn(CLOSE_COLUMN))?;

    let mut closes = Vec::with_capacity(cells.len());
    for (row, row_cells) in cells.iter().enumerate() {
        let raw = row_cells.get(close_idx).map(String::as_str).unwrap_or("");
        let value = raw.parse::<f64>().map_err(|_| LoadError::ParseClose {
            row,
            value: raw.to_string(),
        })?;
        closes.push(value);
    }

    Ok(PriceTable {
        columns,
        cells,
        closes,
    })
}
