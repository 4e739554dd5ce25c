//! Statistical utility functions.
//!
//! Every estimator here works on samples that have already had missing
//! values removed; [`valid`] and [`valid_pairs`] do that filtering.

use statrs::statistics::{Data, Median, Statistics};

/// Keep the non-missing values of a slice.
pub fn valid(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Keep positions where both slices hold a value (pairwise-complete).
pub fn valid_pairs(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y.iter())
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(&a, &b)| (a, b))
        .unzip()
}

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.mean()
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    values.variance()
}

/// Calculate the sample standard deviation of a slice.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Sample covariance (n-1 denominator) of two equally long slices.
pub fn covariance(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    x.covariance(y)
}

/// Pearson correlation coefficient; NaN when either side has no variance.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    let cov = covariance(x, y);
    let denom = std_dev(x) * std_dev(y);
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}

/// Calculate the median of a slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    Data::new(values.to_vec()).median()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn variance_calculates_correctly() {
        // Sample variance of [1, 2, 3, 4, 5] = 2.5
        assert_relative_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5, epsilon = 1e-10);
        assert!(variance(&[1.0]).is_nan());
        assert!(variance(&[]).is_nan());
    }

    #[test]
    fn std_dev_of_reference_returns() {
        let returns = [0.01, 0.02, -0.02, 0.0, 0.02];
        assert_relative_eq!(std_dev(&returns), 0.016733200530681527, epsilon = 1e-12);
    }

    #[test]
    fn covariance_and_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert_relative_eq!(covariance(&x, &y), 2.0 * variance(&x), epsilon = 1e-12);
        assert_relative_eq!(correlation(&x, &y), 1.0, epsilon = 1e-12);

        let inverted = [8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(correlation(&x, &inverted), -1.0, epsilon = 1e-12);

        assert!(correlation(&x, &[1.0, 1.0, 1.0, 1.0]).is_nan());
        assert!(covariance(&[1.0], &[2.0]).is_nan());
    }

    #[test]
    fn median_calculates_correctly() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-10);
        assert_relative_eq!(median(&[5.0, 1.0, 3.0, 2.0, 4.0]), 3.0, epsilon = 1e-10);
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn missing_values_are_filtered() {
        assert_eq!(valid(&[f64::NAN, 1.0, 2.0]), vec![1.0, 2.0]);

        let (x, y) = valid_pairs(&[f64::NAN, 1.0, 2.0, 3.0], &[1.0, f64::NAN, 5.0, 6.0]);
        assert_eq!(x, vec![2.0, 3.0]);
        assert_eq!(y, vec![5.0, 6.0]);
    }
}
