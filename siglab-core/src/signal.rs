//! Signal derivation — close price versus its trailing rolling mean.

use serde::{Deserialize, Serialize};

use crate::domain::PriceTable;
use crate::indicators::rolling_mean;

/// Price table augmented with the derived `rolling_mean` and `signal` columns.
///
/// Row order and count match the input table. `rolling_mean` is `NAN` until a
/// full window is available; `signal` is 1 where close is strictly greater
/// than the rolling mean and 0 everywhere else (a NaN mean is never exceeded).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalTable {
    pub table: PriceTable,
    pub rolling_mean: Vec<f64>,
    pub signal: Vec<u8>,
}

impl SignalTable {
    /// Fraction of rows with `signal == 1`.
    ///
    /// NaN for a zero-row table; the job never gets here on empty input
    /// because the loader rejects it first.
    pub fn signal_rate(&self) -> f64 {
        let ones: u64 = self.signal.iter().map(|&s| u64::from(s)).sum();
        ones as f64 / self.signal.len() as f64
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Derive the rolling mean and binary signal columns for `table`.
///
/// `window == 1` compares each close to itself, so the signal never fires.
/// A window longer than the table leaves the rolling mean all-NaN and the
/// signal all zero.
pub fn compute_signal(table: PriceTable, window: usize) -> SignalTable {
    let means = rolling_mean(&table.closes, window);
    let signal = table
        .closes
        .iter()
        .zip(&means)
        .map(|(&close, &mean)| u8::from(close > mean))
        .collect();

    SignalTable {
        table,
        rolling_mean: means,
        signal,
    }
}
