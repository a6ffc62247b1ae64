//! Siglab Core — price table domain, rolling-mean indicator, signal derivation.
//!
//! Pure computation only: no file I/O, no logging. The runner crate layers
//! config loading, CSV ingestion, reporting, and orchestration on top of the
//! types and functions here.

pub mod domain;
pub mod indicators;
pub mod rng;
pub mod signal;

pub use domain::PriceTable;
pub use rng::RunRng;
pub use signal::{compute_signal, SignalTable};
