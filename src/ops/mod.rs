//! Relational operations: joins and column renames.

mod join;
mod rename;

pub use join::{JoinKind, join};
pub use rename::{OnMissing, RenameOptions, rename_column, rename_column_in_place};
