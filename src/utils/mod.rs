//! Numerical utilities shared by the risk statistics and the ARIMA engine.

pub mod metrics;
pub mod ols;
pub mod stats;

pub use metrics::mean_squared_error;
pub use ols::{ols_fit, OlsResult};
