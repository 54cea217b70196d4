//! Duplicate-row detection and removal.

use std::collections::HashSet;

use crate::frame::{DataFrame, Value, ValueKey};

/// Number of duplicate rows shown in a report preview.
const PREVIEW_ROWS: usize = 5;

/// Result of scanning a frame for fully-duplicate rows.
#[derive(Debug, Clone)]
pub struct DuplicateReport {
    /// Number of rows that duplicate an earlier row on every column.
    pub count: usize,
    /// Up to the first five duplicate rows, in original row order.
    pub preview: DataFrame,
}

fn row_key(row: &[Value]) -> Vec<ValueKey> {
    row.iter().map(Value::key).collect()
}

/// Count fully-duplicate rows and collect a short preview of them.
///
/// A row is a duplicate when an earlier row equals it on every column;
/// the first occurrence is never counted.
pub fn find_duplicates(frame: &DataFrame) -> DuplicateReport {
    let mut seen: HashSet<Vec<ValueKey>> = HashSet::new();
    let mut count = 0;
    let mut preview_rows = Vec::new();

    for row in frame.rows() {
        if !seen.insert(row_key(row)) {
            count += 1;
            if preview_rows.len() < PREVIEW_ROWS {
                preview_rows.push(row.to_vec());
            }
        }
    }

    log::info!("found {} duplicate rows", count);
    DuplicateReport {
        count,
        preview: DataFrame::from_parts(frame.column_names().to_vec(), preview_rows),
    }
}

/// Return a new frame with duplicate rows removed, keeping the first
/// occurrence of each distinct row and preserving row order among survivors.
pub fn drop_duplicates(frame: &DataFrame) -> DataFrame {
    let mut seen: HashSet<Vec<ValueKey>> = HashSet::new();
    let mut rows = Vec::new();

    for row in frame.rows() {
        if seen.insert(row_key(row)) {
            rows.push(row.to_vec());
        }
    }

    log::info!(
        "removed {} duplicate rows, {} remain",
        frame.row_count() - rows.len(),
        rows.len()
    );
    DataFrame::from_parts(frame.column_names().to_vec(), rows)
}
