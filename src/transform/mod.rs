//! Series transformations: price/return conversions and the rolling window engine.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use quant_econometrics::core::TimeSeries;
//! use quant_econometrics::transform::{prices, returns, ReturnKind};
//!
//! let base = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
//! let dates = (0..3).map(|i| base + Duration::days(i)).collect();
//! let px = TimeSeries::new(dates, vec![100.0, 101.0, 103.02]).unwrap();
//!
//! let r = returns(&px, 1, ReturnKind::Simple).unwrap();
//! assert!(r.values()[0].is_nan());
//!
//! let rebuilt = prices(&r, 100.0, ReturnKind::Simple).unwrap();
//! assert!((rebuilt.values()[2] - 103.02).abs() < 1e-9);
//! ```

pub mod returns;
pub mod window;

pub use returns::{change, index, prices, returns, ReturnKind};
pub use window::{
    rolling, rolling_apply, rolling_apply_pair, rolling_max, rolling_min, rolling_pair,
    rolling_std, Window, WindowSize,
};
