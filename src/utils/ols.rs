//! Ordinary Least Squares (OLS) regression with an intercept.
//!
//! Used by the ARIMA estimator to regress a differenced series on its own
//! lags (and, for moving-average terms, on lagged residual proxies).

use crate::error::{EconometricsError, Result};
use crate::utils::stats;

/// Relative pivot tolerance below which the normal equations are treated as singular.
const PIVOT_TOLERANCE: f64 = 1e-12;

/// OLS regression coefficients and intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsResult {
    /// Intercept term.
    pub intercept: f64,
    /// Regression coefficients, one per regressor column, in input order.
    pub coefficients: Vec<f64>,
}

impl OlsResult {
    /// Predict a single observation from its regressor values.
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(row.iter())
            .fold(self.intercept, |acc, (c, x)| acc + c * x)
    }
}

/// Fit `y = intercept + X @ coefficients`.
///
/// `regressors` holds one column per regressor, each the same length as `y`.
/// Uses Cholesky decomposition to solve the normal equations; a design that
/// is not positive definite is reported as a computation error.
pub fn ols_fit(y: &[f64], regressors: &[Vec<f64>]) -> Result<OlsResult> {
    let n = y.len();
    let k = regressors.len();

    if n < k + 1 {
        return Err(EconometricsError::InsufficientData {
            needed: k + 1,
            got: n,
        });
    }

    for column in regressors {
        if column.len() != n {
            return Err(EconometricsError::DimensionMismatch {
                expected: n,
                got: column.len(),
            });
        }
    }

    if k == 0 {
        return Ok(OlsResult {
            intercept: stats::mean(y),
            coefficients: vec![],
        });
    }

    // Design matrix has k+1 columns: [1, x1, x2, ...]
    let num_params = k + 1;
    let mut xtx = vec![vec![0.0; num_params]; num_params];
    let mut xty = vec![0.0; num_params];

    for obs in 0..n {
        let y_obs = y[obs];

        xtx[0][0] += 1.0;
        xty[0] += y_obs;
        for i in 0..k {
            let xi = regressors[i][obs];
            xtx[0][i + 1] += xi;
            xtx[i + 1][0] += xi;
            xty[i + 1] += xi * y_obs;
            for j in 0..k {
                xtx[i + 1][j + 1] += xi * regressors[j][obs];
            }
        }
    }

    let beta = solve_symmetric(&xtx, &xty).ok_or_else(|| {
        EconometricsError::ComputationError(
            "OLS regression failed: design matrix is singular".into(),
        )
    })?;

    if beta.iter().any(|b| !b.is_finite()) {
        return Err(EconometricsError::ComputationError(
            "OLS regression produced non-finite coefficients".into(),
        ));
    }

    Ok(OlsResult {
        intercept: beta[0],
        coefficients: beta[1..].to_vec(),
    })
}

/// Solve symmetric positive definite system using Cholesky decomposition.
///
/// Solves A @ x = b where A is symmetric positive definite.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // Cholesky decomposition A = L @ L'
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum.is_nan() || sum <= PIVOT_TOLERANCE * a[i][i].abs() {
                    return None; // Not positive definite
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ols_fit_simple_linear() {
        // y = 2 + 3*x
        let y = vec![5.0, 8.0, 11.0, 14.0, 17.0];
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        let result = ols_fit(&y, &[x]).unwrap();

        assert_relative_eq!(result.intercept, 2.0, epsilon = 1e-8);
        assert_eq!(result.coefficients.len(), 1);
        assert_relative_eq!(result.coefficients[0], 3.0, epsilon = 1e-8);
        assert_relative_eq!(result.predict_row(&[6.0]), 20.0, epsilon = 1e-8);
    }

    #[test]
    fn ols_fit_multiple_regressors() {
        // y = 1 + 2*x1 + 3*x2
        let x1 = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let x2 = vec![0.5, 2.5, 1.0, 3.0, 1.5, 3.5, 2.0, 4.0];
        let y: Vec<f64> = x1
            .iter()
            .zip(x2.iter())
            .map(|(a, b)| 1.0 + 2.0 * a + 3.0 * b)
            .collect();

        let result = ols_fit(&y, &[x1, x2]).unwrap();

        assert_relative_eq!(result.intercept, 1.0, epsilon = 1e-6);
        assert_relative_eq!(result.coefficients[0], 2.0, epsilon = 1e-6);
        assert_relative_eq!(result.coefficients[1], 3.0, epsilon = 1e-6);
    }

    #[test]
    fn ols_fit_no_regressors() {
        // Should return mean as intercept
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let result = ols_fit(&y, &[]).unwrap();

        assert_relative_eq!(result.intercept, 6.0, epsilon = 1e-10);
        assert!(result.coefficients.is_empty());
    }

    #[test]
    fn ols_fit_detects_singular_design() {
        // x2 is an exact multiple of x1
        let x1 = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let x2: Vec<f64> = x1.iter().map(|v| 2.0 * v).collect();
        let y = vec![1.0, 3.0, 2.0, 5.0, 4.0];

        assert!(matches!(
            ols_fit(&y, &[x1, x2]),
            Err(EconometricsError::ComputationError(_))
        ));

        // constant regressor is collinear with the intercept
        let constant = vec![1.0; 5];
        assert!(ols_fit(&y, &[constant]).is_err());
    }

    #[test]
    fn ols_fit_dimension_checks() {
        let y = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            ols_fit(&y, &[vec![1.0, 2.0]]),
            Err(EconometricsError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            ols_fit(&[1.0], &[vec![1.0]]),
            Err(EconometricsError::InsufficientData { .. })
        ));
    }

    #[test]
    fn ols_with_noise() {
        let n = 100;
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = x
            .iter()
            .enumerate()
            .map(|(i, &xi)| 2.5 + 1.7 * xi + (i as f64 * 0.13).sin() * 0.1)
            .collect();

        let result = ols_fit(&y, &[x]).unwrap();

        assert_relative_eq!(result.intercept, 2.5, epsilon = 0.1);
        assert_relative_eq!(result.coefficients[0], 1.7, epsilon = 0.1);
    }
}
