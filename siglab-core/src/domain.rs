//! Price table — the tabular input in parsed form.

use serde::{Deserialize, Serialize};

/// An ordered price series with arbitrary pass-through columns.
///
/// Only `close` is interpreted; every other column is carried as raw cell
/// text so the table survives the pipeline without being examined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTable {
    /// Column names from the header row.
    pub columns: Vec<String>,
    /// Raw cell text, one inner vector per row.
    pub cells: Vec<Vec<String>>,
    /// Parsed `close` values, one per row, in input order.
    pub closes: Vec<f64>,
}

impl PriceTable {
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}
