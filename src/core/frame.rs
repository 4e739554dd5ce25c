//! Named columns sharing one timestamp index.

use crate::core::time_series::{validate_index, TimeSeries};
use crate::error::{EconometricsError, Result};
use chrono::{DateTime, Utc};

/// A table of named numeric columns over a shared, strictly increasing index.
///
/// Columns keep their insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<(String, Vec<f64>)>,
}

/// Builder for constructing a Frame.
#[derive(Debug, Clone, Default)]
pub struct FrameBuilder {
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<(String, Vec<f64>)>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestamps(mut self, timestamps: Vec<DateTime<Utc>>) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.push((name.into(), values));
        self
    }

    pub fn build(self) -> Result<Frame> {
        Frame::new(self.timestamps, self.columns)
    }
}

impl Frame {
    /// Create a frame, validating the index and every column.
    pub fn new(timestamps: Vec<DateTime<Utc>>, columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        validate_index(&timestamps)?;

        for (i, (name, values)) in columns.iter().enumerate() {
            if values.len() != timestamps.len() {
                return Err(EconometricsError::DimensionMismatch {
                    expected: timestamps.len(),
                    got: values.len(),
                });
            }
            if columns[..i].iter().any(|(other, _)| other == name) {
                return Err(EconometricsError::invalid(format!(
                    "duplicate column '{}'",
                    name
                )));
            }
        }

        Ok(Self {
            timestamps,
            columns,
        })
    }

    /// Build a frame from series that share the same index.
    pub fn from_series(series: Vec<TimeSeries>) -> Result<Self> {
        let Some(first) = series.first() else {
            return Ok(Self::default());
        };
        let timestamps = first.timestamps().to_vec();

        let mut columns = Vec::with_capacity(series.len());
        for (i, s) in series.iter().enumerate() {
            first.ensure_aligned(s)?;
            let name = s
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("column_{}", i));
            columns.push((name, s.values().to_vec()));
        }

        Self::new(timestamps, columns)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Raw values of a column.
    pub fn values(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// A column as a named TimeSeries.
    pub fn column(&self, name: &str) -> Option<TimeSeries> {
        let values = self.values(name)?;
        Some(TimeSeries::from_parts(self.timestamps.clone(), values.to_vec()).with_name(name))
    }

    /// Iterate over `(name, values)` pairs.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}
