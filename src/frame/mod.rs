//! In-memory table model: typed cell values and the data frame.

mod table;
mod value;

pub use table::DataFrame;
pub use value::{Value, ValueKey};
