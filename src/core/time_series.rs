//! TimeSeries data structure for timestamped observations.

use crate::error::{EconometricsError, Result};
use chrono::{DateTime, Utc};

/// A univariate series of timestamped values.
///
/// Timestamps are strictly increasing. Missing observations are stored as
/// `NaN` and propagate through arithmetic; every transform returns a new
/// series rather than mutating its input.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
    name: Option<String>,
}

impl TimeSeries {
    /// Create a series, validating the index.
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(EconometricsError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        validate_index(&timestamps)?;

        Ok(Self {
            timestamps,
            values,
            name: None,
        })
    }

    /// Assemble a series whose index has already been validated.
    pub(crate) fn from_parts(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Self {
        debug_assert_eq!(timestamps.len(), values.len());
        Self {
            timestamps,
            values,
            name: None,
        }
    }

    /// Create an empty series.
    pub fn empty() -> Self {
        Self {
            timestamps: Vec::new(),
            values: Vec::new(),
            name: None,
        }
    }

    /// Attach a name to the series.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the series name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// First value, if the series is non-empty.
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Check if any observation is missing (NaN or infinite).
    pub fn has_missing_values(&self) -> bool {
        self.values.iter().any(|v| !v.is_finite())
    }

    /// Number of non-missing observations.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    /// Build a series on the same index with new values.
    pub fn with_values(&self, values: Vec<f64>) -> Result<Self> {
        if values.len() != self.len() {
            return Err(EconometricsError::DimensionMismatch {
                expected: self.len(),
                got: values.len(),
            });
        }
        Ok(Self {
            timestamps: self.timestamps.clone(),
            values,
            name: self.name.clone(),
        })
    }

    /// Apply `f` to every value, keeping the index.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            timestamps: self.timestamps.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
            name: self.name.clone(),
        }
    }

    /// Check whether both series share exactly the same timestamps.
    pub fn has_same_index(&self, other: &TimeSeries) -> bool {
        self.timestamps == other.timestamps
    }

    /// Fail unless `other` is indexed identically to `self`.
    pub fn ensure_aligned(&self, other: &TimeSeries) -> Result<()> {
        if self.has_same_index(other) {
            Ok(())
        } else {
            Err(EconometricsError::invalid(format!(
                "series indices differ ({} vs {} observations); align them before pairing",
                self.len(),
                other.len()
            )))
        }
    }

    /// Extract observations `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> Result<TimeSeries> {
        if start > end {
            return Err(EconometricsError::invalid("start must be <= end"));
        }
        if end > self.len() {
            return Err(EconometricsError::DimensionMismatch {
                expected: self.len(),
                got: end,
            });
        }

        Ok(TimeSeries {
            timestamps: self.timestamps[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
            name: self.name.clone(),
        })
    }

    /// Iterate over `(timestamp, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.values.iter().copied())
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::empty()
    }
}

/// Reject indices that are not strictly increasing.
pub(crate) fn validate_index(timestamps: &[DateTime<Utc>]) -> Result<()> {
    for i in 1..timestamps.len() {
        if timestamps[i] <= timestamps[i - 1] {
            return Err(EconometricsError::TimestampError(format!(
                "timestamps must be strictly increasing (position {})",
                i
            )));
        }
    }
    Ok(())
}
