//! Rolling window engine.
//!
//! A [`Window`] selects, for every position `t`, the trailing observations
//! `[t - size + 1, t]` (or `[0, t]` when unbounded). Missing values inside a
//! window are skipped before the reducer runs, so reducers only ever see
//! valid samples and decide for themselves how many they need (returning
//! `NaN` when they have too few). Positions inside the ramp are always
//! missing, and output is aligned one-to-one with the input.

use crate::core::TimeSeries;
use crate::error::{EconometricsError, Result};
use crate::utils::stats;

/// Number of trailing observations covered by a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowSize {
    /// The last `n` observations, current one included.
    Bounded(usize),
    /// Every observation from the start of the series (expanding).
    Unbounded,
}

/// Rolling window configuration: trailing size plus a warm-up ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    size: WindowSize,
    ramp: usize,
}

impl Window {
    /// A bounded window of `size` observations with `ramp` leading positions
    /// forced missing. Validated when used.
    pub fn new(size: usize, ramp: usize) -> Self {
        Self {
            size: WindowSize::Bounded(size),
            ramp,
        }
    }

    /// An expanding window over all observations so far.
    pub fn unbounded() -> Self {
        Self {
            size: WindowSize::Unbounded,
            ramp: 0,
        }
    }

    /// Replace the ramp.
    pub fn with_ramp(mut self, ramp: usize) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn size(&self) -> WindowSize {
        self.size
    }

    pub fn ramp(&self) -> usize {
        self.ramp
    }

    /// Check the window invariants: bounded size >= 1 and ramp <= size.
    pub fn validate(&self) -> Result<()> {
        match self.size {
            WindowSize::Bounded(0) => Err(EconometricsError::invalid(
                "window size must be at least 1",
            )),
            WindowSize::Bounded(size) if self.ramp > size => {
                Err(EconometricsError::invalid(format!(
                    "window ramp ({}) exceeds window size ({})",
                    self.ramp, size
                )))
            }
            _ => Ok(()),
        }
    }

    /// First index covered by the window ending at `t`.
    fn start(&self, t: usize) -> usize {
        match self.size {
            WindowSize::Bounded(size) => (t + 1).saturating_sub(size),
            WindowSize::Unbounded => 0,
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl From<usize> for Window {
    fn from(size: usize) -> Self {
        Self::new(size, 0)
    }
}

/// Generic rolling window application over a single series.
pub fn rolling_apply<F>(series: &[f64], window: &Window, f: F) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    if series.is_empty() {
        return Ok(Vec::new());
    }
    window.validate()?;

    let result = (0..series.len())
        .map(|t| {
            if t < window.ramp {
                return f64::NAN;
            }
            let sample = stats::valid(&series[window.start(t)..=t]);
            if sample.is_empty() {
                f64::NAN
            } else {
                f(&sample)
            }
        })
        .collect();

    Ok(result)
}

/// Generic rolling window application over two aligned series.
///
/// Only pairwise-complete observations reach the reducer.
pub fn rolling_apply_pair<F>(x: &[f64], y: &[f64], window: &Window, f: F) -> Result<Vec<f64>>
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    if x.len() != y.len() {
        return Err(EconometricsError::invalid(format!(
            "paired series differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Ok(Vec::new());
    }
    window.validate()?;

    let result = (0..x.len())
        .map(|t| {
            if t < window.ramp {
                return f64::NAN;
            }
            let start = window.start(t);
            let (xs, ys) = stats::valid_pairs(&x[start..=t], &y[start..=t]);
            if xs.is_empty() {
                f64::NAN
            } else {
                f(&xs, &ys)
            }
        })
        .collect();

    Ok(result)
}

/// Apply a reducer over a TimeSeries, keeping its index.
pub fn rolling<F>(series: &TimeSeries, window: &Window, f: F) -> Result<TimeSeries>
where
    F: Fn(&[f64]) -> f64,
{
    let values = rolling_apply(series.values(), window, f)?;
    series.with_values(values)
}

/// Apply a pairwise reducer over two TimeSeries that share an index.
pub fn rolling_pair<F>(x: &TimeSeries, y: &TimeSeries, window: &Window, f: F) -> Result<TimeSeries>
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    x.ensure_aligned(y)?;
    let values = rolling_apply_pair(x.values(), y.values(), window, f)?;
    x.with_values(values)
}

/// Compute rolling sample standard deviation.
pub fn rolling_std(series: &[f64], window: &Window) -> Result<Vec<f64>> {
    rolling_apply(series, window, stats::std_dev)
}

/// Compute rolling minimum.
pub fn rolling_min(series: &[f64], window: &Window) -> Result<Vec<f64>> {
    rolling_apply(series, window, |s| {
        s.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

/// Compute rolling maximum.
pub fn rolling_max(series: &[f64], window: &Window) -> Result<Vec<f64>> {
    rolling_apply(series, window, |s| {
        s.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_series_eq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            if e.is_nan() {
                assert!(a.is_nan(), "position {}: expected NaN, got {}", i, a);
            } else {
                assert_relative_eq!(*a, *e, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn window_validation() {
        assert!(Window::new(3, 0).validate().is_ok());
        assert!(Window::new(3, 3).validate().is_ok());
        assert!(Window::unbounded().with_ramp(10).validate().is_ok());
        assert!(matches!(
            Window::new(2, 3).validate(),
            Err(EconometricsError::InvalidArgument(_))
        ));
        assert!(Window::new(0, 0).validate().is_err());
    }

    #[test]
    fn window_conversions() {
        assert_eq!(Window::from(4usize), Window::new(4, 0));
        assert_eq!(Window::default().size(), WindowSize::Unbounded);
        assert_eq!(Window::default().ramp(), 0);
    }

    #[test]
    fn rolling_sum_bounded_window() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_apply(&series, &Window::new(3, 0), |s| s.iter().sum()).unwrap();
        // partial windows use what is available
        assert_series_eq(&result, &[1.0, 3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn rolling_unbounded_window_expands() {
        let series = vec![1.0, 2.0, 3.0, 4.0];
        let result = rolling_apply(&series, &Window::unbounded(), |s| s.iter().sum()).unwrap();
        assert_series_eq(&result, &[1.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn rolling_ramp_masks_leading_positions() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_apply(&series, &Window::new(3, 2), |s| s.iter().sum()).unwrap();
        assert_series_eq(&result, &[f64::NAN, f64::NAN, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn rolling_skips_missing_values() {
        let series = vec![f64::NAN, 2.0, f64::NAN, 4.0];
        let result = rolling_apply(&series, &Window::new(2, 0), |s| s.len() as f64).unwrap();
        assert_series_eq(&result, &[f64::NAN, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn rolling_std_needs_two_points() {
        let series = vec![f64::NAN, 0.01, 0.02, -0.02, 0.0, 0.02];
        let result = rolling_std(&series, &Window::default()).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_relative_eq!(result[5], 0.016733200530681527, epsilon = 1e-12);
    }

    #[test]
    fn rolling_min_max() {
        let series = vec![1.0, 5.0, 5.0, 4.0, 4.0, 1.0];
        let window = Window::new(2, 0);
        assert_series_eq(
            &rolling_max(&series, &window).unwrap(),
            &[1.0, 5.0, 5.0, 5.0, 4.0, 4.0],
        );
        assert_series_eq(
            &rolling_min(&series, &window).unwrap(),
            &[1.0, 1.0, 5.0, 4.0, 4.0, 1.0],
        );
    }

    #[test]
    fn rolling_pair_drops_incomplete_pairs() {
        let x = vec![1.0, f64::NAN, 3.0, 4.0];
        let y = vec![1.0, 2.0, f64::NAN, 4.0];
        let result =
            rolling_apply_pair(&x, &y, &Window::unbounded(), |a, _| a.len() as f64).unwrap();
        assert_series_eq(&result, &[1.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn rolling_pair_rejects_length_mismatch() {
        let result = rolling_apply_pair(&[1.0, 2.0], &[1.0], &Window::default(), |_, _| 0.0);
        assert!(matches!(result, Err(EconometricsError::InvalidArgument(_))));
    }

    #[test]
    fn empty_input_ignores_window() {
        let result = rolling_apply(&[], &Window::new(0, 0), |_| 0.0).unwrap();
        assert!(result.is_empty());
        let result = rolling_apply_pair(&[], &[], &Window::new(1, 5), |_, _| 0.0).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn invalid_window_is_rejected_on_data() {
        let result = rolling_apply(&[1.0, 2.0], &Window::new(1, 2), |_| 0.0);
        assert!(matches!(result, Err(EconometricsError::InvalidArgument(_))));
    }
}
