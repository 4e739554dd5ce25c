//! Annualized realized volatility.

use crate::core::TimeSeries;
use crate::detection::infer_frequency;
use crate::error::Result;
use crate::transform::{returns, rolling, ReturnKind, Window};
use crate::utils::stats;

/// Rolling annualized volatility of a price series, in percent.
///
/// Simple one-period returns are reduced with a rolling sample standard
/// deviation, then scaled by the annualization factor of the inferred
/// sampling frequency and by 100.
pub fn volatility(series: &TimeSeries, window: impl Into<Window>) -> Result<TimeSeries> {
    let window = window.into();
    if series.is_empty() {
        return Ok(series.clone());
    }
    window.validate()?;

    // a single price has no return, and no frequency to infer
    if series.len() < 2 {
        return Ok(series.map(|_| f64::NAN));
    }

    let scale = infer_frequency(series.timestamps())?.annualization_scale() * 100.0;
    let r = returns(series, 1, ReturnKind::Simple)?;
    let std = rolling(&r, &window, stats::std_dev)?;
    Ok(std.map(|v| v * scale))
}
