//! Sampling frequency inference and annualization.

use crate::core::TimeSeries;
use crate::error::{EconometricsError, Result};
use crate::utils::stats;
use chrono::{DateTime, Utc};

/// Inferred sampling cadence of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyClass {
    Daily,
    Weekly,
    SemiMonthly,
    Monthly,
    Quarterly,
    Annual,
}

impl FrequencyClass {
    /// Number of periods per year.
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Self::Daily => 252.0,
            Self::Weekly => 52.0,
            Self::SemiMonthly => 26.0,
            Self::Monthly => 12.0,
            Self::Quarterly => 4.0,
            Self::Annual => 1.0,
        }
    }

    /// Factor that scales a per-period statistic to an annual one.
    pub fn annualization_scale(&self) -> f64 {
        self.periods_per_year().sqrt()
    }

    /// Bucket a median gap expressed in calendar days.
    pub fn from_median_gap(days: f64) -> Option<Self> {
        match days {
            d if d == 1.0 => Some(Self::Daily),
            d if d == 7.0 => Some(Self::Weekly),
            d if (14.0..=15.0).contains(&d) => Some(Self::SemiMonthly),
            d if (28.0..=31.0).contains(&d) => Some(Self::Monthly),
            d if (89.0..=92.0).contains(&d) => Some(Self::Quarterly),
            d if (365.0..=366.0).contains(&d) => Some(Self::Annual),
            _ => None,
        }
    }
}

/// Infer the frequency class from the median calendar-day gap between timestamps.
///
/// Duplicate timestamps (a zero gap) and unrecognized gaps are invalid.
pub fn infer_frequency(timestamps: &[DateTime<Utc>]) -> Result<FrequencyClass> {
    if timestamps.len() < 2 {
        return Err(EconometricsError::invalid(format!(
            "frequency inference needs at least 2 observations, got {}",
            timestamps.len()
        )));
    }

    let gaps: Vec<f64> = timestamps
        .windows(2)
        .map(|w| (w[1].date_naive() - w[0].date_naive()).num_days() as f64)
        .collect();

    if gaps.iter().any(|&g| g <= 0.0) {
        return Err(EconometricsError::invalid(
            "timestamps contain duplicate or decreasing dates",
        ));
    }

    let median_gap = stats::median(&gaps);
    FrequencyClass::from_median_gap(median_gap).ok_or_else(|| {
        EconometricsError::invalid(format!(
            "cannot annualize series with median gap of {} days",
            median_gap
        ))
    })
}

/// Scale a series by the annualization factor of its inferred frequency.
pub fn annualize(series: &TimeSeries) -> Result<TimeSeries> {
    if series.is_empty() {
        return Ok(series.clone());
    }
    let scale = infer_frequency(series.timestamps())?.annualization_scale();
    Ok(series.map(|v| v * scale))
}
