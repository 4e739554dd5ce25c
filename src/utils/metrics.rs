//! Accuracy metrics for held-out evaluation.

use crate::error::{EconometricsError, Result};

/// Mean squared error between actual and predicted values.
///
/// Pairs where either side is missing are ignored; at least one complete
/// pair is required.
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    if actual.len() != predicted.len() {
        return Err(EconometricsError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let (sum, count) = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, p)| a.is_finite() && p.is_finite())
        .fold((0.0, 0usize), |(sum, count), (a, p)| {
            (sum + (a - p).powi(2), count + 1)
        });

    if count == 0 {
        return Err(EconometricsError::InsufficientData { needed: 1, got: 0 });
    }

    Ok(sum / count as f64)
}
