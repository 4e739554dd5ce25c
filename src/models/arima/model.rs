//! ARIMA order and fitted-model estimation.

use crate::error::{EconometricsError, Result};
use crate::models::arima::diff::{difference, difference_tail, integrate};
use crate::utils::{mean_squared_error, ols_fit};
use std::fmt;

/// ARIMA model order `(p, d, q)`.
///
/// Orders compare lexicographically, so the derived `Ord` prefers the
/// simpler model when scores tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArimaOrder {
    /// AR order (p)
    pub p: usize,
    /// Differencing order (d)
    pub d: usize,
    /// MA order (q)
    pub q: usize,
}

impl ArimaOrder {
    /// Create a new ARIMA order.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Number of leading positions without a fitted value.
    pub fn warmup(&self) -> usize {
        self.d + self.p.max(self.q)
    }
}

impl fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.d, self.q)
    }
}

/// An estimated ARIMA model for one column.
///
/// Coefficients act on the `d`-times differenced series:
/// `w[t] = constant + Σ ar[i]·w[t-1-i] + Σ ma[j]·e[t-1-j] + e[t]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    order: ArimaOrder,
    constant: f64,
    ar_coef: Vec<f64>,
    ma_coef: Vec<f64>,
    score: f64,
}

impl FittedModel {
    /// Estimate `order` on the first `n_train` observations of `series` and
    /// score it by one-step-ahead MSE over the remaining ones.
    pub fn estimate(series: &[f64], n_train: usize, order: ArimaOrder) -> Result<Self> {
        if n_train > series.len() {
            return Err(EconometricsError::DimensionMismatch {
                expected: series.len(),
                got: n_train,
            });
        }

        let w = difference(series, order.d);
        let (constant, ar_coef, ma_coef) = if order.q == 0 {
            estimate_ar(&w, n_train, order)?
        } else {
            estimate_hannan_rissanen(&w, n_train, order)?
        };

        let mut model = Self {
            order,
            constant,
            ar_coef,
            ma_coef,
            score: f64::NAN,
        };

        let (fitted, _) = model.recursion(&w);
        let score = mean_squared_error(&w[n_train..], &fitted[n_train..])?;
        if !score.is_finite() {
            return Err(EconometricsError::ComputationError(format!(
                "ARIMA{} produced a non-finite held-out score",
                order
            )));
        }
        model.score = score;

        Ok(model)
    }

    /// Get the model order.
    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    /// Get the intercept.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Get AR coefficients.
    pub fn ar_coef(&self) -> &[f64] {
        &self.ar_coef
    }

    /// Get MA coefficients.
    pub fn ma_coef(&self) -> &[f64] {
        &self.ma_coef
    }

    /// Held-out mean squared error used for selection.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// One-step-ahead fitted values of the differenced `series`, aligned to it.
    ///
    /// The first `d + max(p, q)` positions are missing.
    pub fn fitted_values(&self, series: &[f64]) -> Vec<f64> {
        let w = difference(series, self.order.d);
        self.recursion(&w).0
    }

    /// Forecast `horizon` levels past the end of `history`.
    pub fn forecast(&self, history: &[f64], horizon: usize) -> Result<Vec<f64>> {
        let needed = self.order.warmup() + 1;
        if history.len() < needed {
            return Err(EconometricsError::InsufficientData {
                needed,
                got: history.len(),
            });
        }
        if horizon == 0 {
            return Ok(Vec::new());
        }

        let n = history.len();
        let mut w = difference(history, self.order.d);
        let (_, mut residuals) = self.recursion(&w);

        for _ in 0..horizon {
            let pred = self.predict_next(&w, &residuals);
            w.push(pred);
            residuals.push(0.0);
        }

        Ok(integrate(&w[n..], &difference_tail(history, self.order.d)))
    }

    /// Run the model recursion over a differenced series, returning fitted
    /// values and residuals. Residuals are zero where no fit exists.
    fn recursion(&self, w: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let n = w.len();
        let mut fitted = vec![f64::NAN; n];
        let mut residuals = vec![0.0; n];

        for t in self.order.warmup()..n {
            let pred = self.predict_next(&w[..t], &residuals[..t]);
            fitted[t] = pred;
            let error = w[t] - pred;
            if error.is_finite() {
                residuals[t] = error;
            }
        }

        (fitted, residuals)
    }

    /// Predict the value following `w` given its residual history.
    fn predict_next(&self, w: &[f64], residuals: &[f64]) -> f64 {
        let t = w.len();
        let mut pred = self.constant;
        for (i, coef) in self.ar_coef.iter().enumerate() {
            pred += coef * w[t - 1 - i];
        }
        for (j, coef) in self.ma_coef.iter().enumerate() {
            pred += coef * residuals[t - 1 - j];
        }
        pred
    }
}

/// Regression rows for `w[t]` on lags of `w` and (optionally) lagged residuals.
///
/// Rows with any missing value are dropped.
fn lagged_design(
    w: &[f64],
    residuals: Option<&[f64]>,
    p: usize,
    q: usize,
    start: usize,
    end: usize,
) -> (Vec<f64>, Vec<Vec<f64>>) {
    let mut y = Vec::new();
    let mut columns = vec![Vec::new(); p + q];

    for t in start..end {
        let mut row: Vec<f64> = (1..=p).map(|lag| w[t - lag]).collect();
        if let Some(e) = residuals {
            row.extend((1..=q).map(|lag| e[t - lag]));
        }
        if !w[t].is_finite() || row.iter().any(|v| !v.is_finite()) {
            continue;
        }
        y.push(w[t]);
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }

    (y, columns)
}

/// AR(p) by OLS on the training prefix of the differenced series.
fn estimate_ar(w: &[f64], n_train: usize, order: ArimaOrder) -> Result<(f64, Vec<f64>, Vec<f64>)> {
    let start = order.d + order.p;
    let (y, regressors) = lagged_design(w, None, order.p, 0, start.min(n_train), n_train);
    let ols = ols_fit(&y, &regressors)?;
    Ok((ols.intercept, ols.coefficients, Vec::new()))
}

/// ARMA(p, q) by two-stage regression: a long autoregression supplies
/// residual proxies, which then enter a second OLS as lagged regressors.
fn estimate_hannan_rissanen(
    w: &[f64],
    n_train: usize,
    order: ArimaOrder,
) -> Result<(f64, Vec<f64>, Vec<f64>)> {
    let long_order = order.p + order.q + 1;
    let start = (order.d + long_order).min(n_train);

    let (y, regressors) = lagged_design(w, None, long_order, 0, start, n_train);
    let long_ar = ols_fit(&y, &regressors)?;

    let mut proxies = vec![f64::NAN; w.len()];
    for t in start..n_train {
        let lags: Vec<f64> = (1..=long_order).map(|lag| w[t - lag]).collect();
        proxies[t] = w[t] - long_ar.predict_row(&lags);
    }

    let start = (order.d + order.p.max(order.q)).min(n_train);
    let (y, regressors) = lagged_design(w, Some(&proxies), order.p, order.q, start, n_train);
    let ols = ols_fit(&y, &regressors)?;

    let (ar, ma) = ols.coefficients.split_at(order.p);
    Ok((ols.intercept, ar.to_vec(), ma.to_vec()))
}
