//! Rolling co-movement statistics between two aligned series.

use crate::core::TimeSeries;
use crate::error::Result;
use crate::transform::{returns, rolling_pair, ReturnKind, Window};
use crate::utils::stats;

/// Leading positions of a beta series that are always missing.
pub const BETA_WARMUP: usize = 3;

/// Convert both inputs to one-period simple returns when they hold prices.
fn prepare(x: &TimeSeries, y: &TimeSeries, use_prices: bool) -> Result<(TimeSeries, TimeSeries)> {
    x.ensure_aligned(y)?;
    if use_prices {
        Ok((
            returns(x, 1, ReturnKind::Simple)?,
            returns(y, 1, ReturnKind::Simple)?,
        ))
    } else {
        Ok((x.clone(), y.clone()))
    }
}

/// Rolling Pearson correlation of `x` and `y`.
///
/// Each window uses pairwise-complete observations and needs at least two.
///
/// # Arguments
/// * `x`, `y` - Series on the same timestamp index
/// * `window` - Rolling window; a bare `usize` means a size with no ramp
/// * `use_prices` - Convert both inputs to simple returns first
pub fn correlation(
    x: &TimeSeries,
    y: &TimeSeries,
    window: impl Into<Window>,
    use_prices: bool,
) -> Result<TimeSeries> {
    if x.is_empty() && y.is_empty() {
        return Ok(x.clone());
    }
    let window = window.into();
    let (a, b) = prepare(x, y, use_prices)?;
    rolling_pair(&a, &b, &window, stats::correlation)
}

/// Rolling beta of `x` against `benchmark`: `Cov(x, benchmark) / Var(benchmark)`.
///
/// The first [`BETA_WARMUP`] positions are always missing.
///
/// # Arguments
/// * `x` - Asset series
/// * `benchmark` - Benchmark series on the same index as `x`
/// * `window` - Rolling window
/// * `use_prices` - Convert both inputs to simple returns first
///
/// # Errors
/// Returns `InvalidArgument` if the indexes differ or the ramp exceeds the window.
pub fn beta(
    x: &TimeSeries,
    benchmark: &TimeSeries,
    window: impl Into<Window>,
    use_prices: bool,
) -> Result<TimeSeries> {
    if x.is_empty() && benchmark.is_empty() {
        return Ok(x.clone());
    }
    let window = window.into();
    let (a, b) = prepare(x, benchmark, use_prices)?;

    let raw = rolling_pair(&a, &b, &window, |xs, bs| {
        let var = stats::variance(bs);
        if var == 0.0 {
            f64::NAN
        } else {
            stats::covariance(xs, bs) / var
        }
    })?;

    let mut values = raw.values().to_vec();
    values
        .iter_mut()
        .take(BETA_WARMUP)
        .for_each(|v| *v = f64::NAN);
    raw.with_values(values)
}
