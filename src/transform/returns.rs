//! Conversions between price levels and returns.

use crate::core::TimeSeries;
use crate::error::{EconometricsError, Result};
use std::fmt;
use std::str::FromStr;

/// How a return is measured between two price observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReturnKind {
    /// `x[t] / x[t-lag] - 1`
    #[default]
    Simple,
    /// `ln(x[t] / x[t-lag])`
    Logarithmic,
}

impl FromStr for ReturnKind {
    type Err = EconometricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            other => Err(EconometricsError::invalid(format!(
                "unknown return type: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

/// Returns over `lag` observations.
///
/// The first `lag` positions are missing. Missing prices propagate.
///
/// # Arguments
/// * `series` - Price series
/// * `lag` - Number of observations between the two prices, at least 1
/// * `kind` - Simple (`p[t] / p[t-lag] - 1`) or logarithmic returns
pub fn returns(series: &TimeSeries, lag: usize, kind: ReturnKind) -> Result<TimeSeries> {
    if series.is_empty() {
        return Ok(series.clone());
    }
    if lag == 0 {
        return Err(EconometricsError::invalid("return lag must be at least 1"));
    }

    let x = series.values();
    let values = (0..x.len())
        .map(|t| {
            if t < lag {
                return f64::NAN;
            }
            let ratio = x[t] / x[t - lag];
            match kind {
                ReturnKind::Simple => ratio - 1.0,
                ReturnKind::Logarithmic => ratio.ln(),
            }
        })
        .collect();

    series.with_values(values)
}

/// Rebuild a price series from returns, starting at `base`.
///
/// Missing returns (such as the leading one produced by [`returns`]) leave
/// the running level unchanged, so the first price equals `base`.
///
/// # Arguments
/// * `series` - One-period returns
/// * `base` - Starting price level
/// * `kind` - How the returns were computed
pub fn prices(series: &TimeSeries, base: f64, kind: ReturnKind) -> Result<TimeSeries> {
    if series.is_empty() {
        return Ok(series.clone());
    }

    let values = match kind {
        ReturnKind::Simple => series
            .values()
            .iter()
            .scan(1.0, |level, &r| {
                if !r.is_nan() {
                    *level *= 1.0 + r;
                }
                Some(base * *level)
            })
            .collect(),
        ReturnKind::Logarithmic => series
            .values()
            .iter()
            .scan(0.0, |cumulative, &r| {
                if !r.is_nan() {
                    *cumulative += r;
                }
                Some(base * cumulative.exp())
            })
            .collect(),
    };

    series.with_values(values)
}

/// Rebase a series so its first observation is 1.
pub fn index(series: &TimeSeries) -> TimeSeries {
    match series.first() {
        Some(first) => series.map(|v| v / first),
        None => series.clone(),
    }
}

/// Difference of every observation from the first one.
pub fn change(series: &TimeSeries) -> TimeSeries {
    match series.first() {
        Some(first) => series.map(|v| v - first),
        None => series.clone(),
    }
}
