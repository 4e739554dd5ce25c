//! Rolling maximum drawdown.

use crate::core::TimeSeries;
use crate::error::Result;
use crate::transform::{rolling_max, rolling_min, Window};

/// Largest peak-to-trough decline observed within the window.
///
/// The running peak is the rolling maximum of the series; the drawdown at
/// each position is `x / peak - 1`, and the output is its rolling minimum
/// over the same window. Values are never positive.
pub fn max_drawdown(series: &TimeSeries, window: impl Into<Window>) -> Result<TimeSeries> {
    if series.is_empty() {
        return Ok(series.clone());
    }
    let window = window.into();
    let x = series.values();

    let peak = rolling_max(x, &window)?;
    let drawdown: Vec<f64> = x.iter().zip(peak.iter()).map(|(v, p)| v / p - 1.0).collect();

    series.with_values(rolling_min(&drawdown, &window)?)
}
