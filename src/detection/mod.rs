//! Detection utilities for time series analysis.
//!
//! Currently this covers sampling-frequency inference, which drives the
//! annualization of volatility-style statistics.

mod frequency;

pub use frequency::{annualize, infer_frequency, FrequencyClass};
