//! # msm-scan
//!
//! Implied-timescale convergence scan across candidate lag times.
//!
//! A Markov state model is only as good as its lag time: too short and the
//! dynamics are not Markovian, too long and resolution is wasted. The
//! standard diagnostic re-estimates the model at a set of lags and checks
//! whether the slow implied timescales flatten out ("the plateau"). This
//! crate produces that table; rendering the plot is someone else's job.
//!
//! Per-lag computations are mutually independent, so the scan runs them in
//! parallel with rayon while preserving the association between each input
//! lag and its output row.

mod error;
mod scanner;
mod table;

pub use error::ScanError;
pub use scanner::scan;
pub use table::LagScanTable;
