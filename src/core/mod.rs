//! Core data structures for timestamped financial data.

mod frame;
mod time_series;

pub use frame::{Frame, FrameBuilder};
pub use time_series::TimeSeries;
