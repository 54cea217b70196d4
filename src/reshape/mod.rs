//! Reshape and aggregation: wide-to-long year melt and trailing-window sums.

mod melt;
mod window;

pub use melt::{MeltOptions, wide_to_long};
pub use window::{WindowOptions, aggregate_year_windows};
