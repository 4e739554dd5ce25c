//! # quant-econometrics
//!
//! Financial time series analytics.
//!
//! Converts between prices and returns, computes rolling risk statistics
//! (volatility, correlation, beta, max drawdown) on a generic window engine,
//! infers sampling frequency for annualization, and fits per-column ARIMA
//! models with automatic order selection by held-out error.

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod detection;
pub mod error;
pub mod models;
pub mod risk;
pub mod transform;
pub mod utils;

pub use error::{EconometricsError, Result};

pub mod prelude {
    pub use crate::core::{Frame, FrameBuilder, TimeSeries};
    pub use crate::detection::{annualize, FrequencyClass};
    pub use crate::error::{EconometricsError, Result};
    pub use crate::models::arima::{Arima, ArimaConfig, ArimaOrder, FitResult, FittedModel};
    pub use crate::risk::{beta, correlation, max_drawdown, volatility};
    pub use crate::transform::{returns, prices, ReturnKind, Window};
}
