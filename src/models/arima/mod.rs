//! ARIMA (Autoregressive Integrated Moving Average) models.
//!
//! This module provides:
//! - Aligned differencing and its inverse
//! - Per-order estimation by least squares, scored on a held-out suffix
//! - A per-column order search over a small `(p, d, q)` grid

mod diff;
mod model;
mod search;

pub use diff::{difference, difference_tail, integrate};
pub use model::{ArimaOrder, FittedModel};
pub use search::{Arima, ArimaConfig, FitResult, MAX_DIFFERENCING};
