//! Single-column rename with overwrite protection.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};
use crate::frame::DataFrame;

/// Policy when the column to rename does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnMissing {
    /// Fail with a validation error.
    Raise,
    /// Return the frame unchanged.
    Ignore,
}

/// Rename configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOptions {
    /// What to do when `old_name` is absent.
    pub on_missing: OnMissing,
    /// Fail if `new_name` already exists instead of replacing that column.
    pub prevent_overwrite: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            on_missing: OnMissing::Raise,
            prevent_overwrite: true,
        }
    }
}

/// Rename a single column, returning a fresh frame.
pub fn rename_column(
    frame: &DataFrame,
    old_name: &str,
    new_name: &str,
    options: &RenameOptions,
) -> Result<DataFrame> {
    let mut out = frame.clone();
    rename_column_in_place(&mut out, old_name, new_name, options)?;
    Ok(out)
}

/// Rename a single column in place.
///
/// Fails with a validation error if `old_name` is absent under
/// [`OnMissing::Raise`], or if `new_name` already exists while
/// `prevent_overwrite` is enabled and `new_name != old_name`. With
/// `prevent_overwrite` disabled, the pre-existing `new_name` column is
/// removed and replaced by the renamed one.
pub fn rename_column_in_place(
    frame: &mut DataFrame,
    old_name: &str,
    new_name: &str,
    options: &RenameOptions,
) -> Result<()> {
    let Some(mut index) = frame.column_index(old_name) else {
        return match options.on_missing {
            OnMissing::Raise => Err(TidyError::Validation(format!(
                "column '{}' does not exist in the frame",
                old_name
            ))),
            OnMissing::Ignore => Ok(()),
        };
    };

    if old_name == new_name {
        return Ok(());
    }

    if let Some(existing) = frame.column_index(new_name) {
        if options.prevent_overwrite {
            return Err(TidyError::Validation(format!(
                "new name '{}' already exists in the frame (prevent_overwrite is enabled)",
                new_name
            )));
        }
        frame.remove_column(existing);
        if existing < index {
            index -= 1;
        }
    }

    frame.set_column_name(index, new_name.to_string());
    Ok(())
}
