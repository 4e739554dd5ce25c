//! Time series models.

pub mod arima;

pub use arima::{Arima, ArimaConfig, FitResult};
