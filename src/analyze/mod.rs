//! Data-quality analysis: missing values and duplicate rows.

mod duplicates;
mod missing;

pub use duplicates::{DuplicateReport, drop_duplicates, find_duplicates};
pub use missing::missing_value_summary;
