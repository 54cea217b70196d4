//! The data frame: ordered named columns over row-major values.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};

use super::value::Value;

static NULL: Value = Value::Null;

/// An in-memory table of named, positionally-aligned columns.
///
/// Rows have no identity beyond position. Every operation in this crate
/// either borrows a frame immutably and returns a fresh one, or (for the
/// in-place rename only) mutates the header row of an existing frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    /// Create a new frame, validating that every row matches the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let width = columns.len();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TidyError::Validation(format!(
                    "row {} has {} values but the frame has {} columns",
                    idx,
                    row.len(),
                    width
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Create an empty frame with the given columns.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Internal constructor for shapes the caller has already aligned.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Find the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Set a specific cell value. Out-of-range positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: Value) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(cell) = r.get_mut(col) {
                *cell = value;
            }
        }
    }

    /// Get a row as a slice.
    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Iterate over all values in one column.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&NULL))
    }

    /// Append a row, validating its width.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(TidyError::Validation(format!(
                "row has {} values but the frame has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Resolve column names to positions, reporting every missing name at once.
    pub fn require_columns<'a, I>(&self, names: I, what: &str) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut indices = Vec::new();
        let mut missing = Vec::new();
        for name in names {
            match self.column_index(name) {
                Some(idx) => indices.push(idx),
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(TidyError::Validation(format!(
                "{} column(s) missing from the frame: {:?}",
                what, missing
            )));
        }
        Ok(indices)
    }

    /// Stable sort of rows by the given column positions, ascending.
    pub fn sort_by_columns(&mut self, indices: &[usize]) {
        self.rows.sort_by(|a, b| {
            for &idx in indices {
                let left = a.get(idx).unwrap_or(&NULL);
                let right = b.get(idx).unwrap_or(&NULL);
                let ord = left.total_cmp(right);
                if ord != std::cmp::Ordering::Equal {
                    return ord;
                }
            }
            std::cmp::Ordering::Equal
        });
    }

    /// Rename the column at a position.
    pub(crate) fn set_column_name(&mut self, index: usize, name: String) {
        if let Some(col) = self.columns.get_mut(index) {
            *col = name;
        }
    }

    /// Remove a column and its cells.
    pub(crate) fn remove_column(&mut self, index: usize) {
        if index >= self.columns.len() {
            return;
        }
        self.columns.remove(index);
        for row in &mut self.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
    }
}
