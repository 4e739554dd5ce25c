//! Rolling risk and co-movement statistics built on the window engine.
//!
//! Every function returns a series aligned to its input index. Window
//! arguments accept a [`Window`](crate::transform::Window) or a plain
//! `usize` size; the default window is expanding.

mod drawdown;
mod pairwise;
mod volatility;

pub use drawdown::max_drawdown;
pub use pairwise::{beta, correlation, BETA_WARMUP};
pub use volatility::volatility;
