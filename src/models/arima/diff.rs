//! Differencing utilities for ARIMA models.
//!
//! Differenced series stay aligned with their input: each pass turns one
//! more leading position into a missing value instead of shortening the
//! buffer, so index `t` always refers to the same observation.

/// Apply first differencing `d` times.
///
/// The first `d` entries of the result are missing. `d == 0` returns a copy.
pub fn difference(series: &[f64], d: usize) -> Vec<f64> {
    let mut result = series.to_vec();
    for _ in 0..d {
        let mut prev = f64::NAN;
        for value in result.iter_mut() {
            let current = *value;
            *value = current - prev;
            prev = current;
        }
    }
    result
}

/// Last value at each differencing level `0..d`, as needed by [`integrate`].
pub fn difference_tail(series: &[f64], d: usize) -> Vec<f64> {
    (0..d)
        .map(|level| difference(series, level).last().copied().unwrap_or(f64::NAN))
        .collect()
}

/// Integrate (reverse differencing) a continuation of a differenced series.
///
/// `tail[level]` is the last observed value of the `level`-times differenced
/// series; the differencing order is `tail.len()`.
pub fn integrate(differenced: &[f64], tail: &[f64]) -> Vec<f64> {
    let mut result = differenced.to_vec();

    for &init_value in tail.iter().rev() {
        result = result
            .iter()
            .scan(init_value, |cumsum, &diff| {
                *cumsum += diff;
                Some(*cumsum)
            })
            .collect();
    }

    result
}
