//! Relational join of two frames on shared key columns.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frame::{DataFrame, Value, ValueKey};

/// Join mode, with standard relational semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
    /// Keep only rows whose key exists on both sides.
    Inner,
    /// Keep all left rows; unmatched right columns become null.
    Left,
    /// Keep all right rows; unmatched left columns become null.
    Right,
    /// Keep all rows from both sides.
    Outer,
}

/// Join two frames on one or more key columns.
///
/// Output columns are the left columns in order (keys keep their left
/// position) followed by the right non-key columns. Non-key column names
/// present on both sides are disambiguated with `_x` (left) and `_y`
/// (right) suffixes. Rows follow probe-side order: left order for inner,
/// left, and outer joins (outer-only right rows appended in right order),
/// right order for right joins.
pub fn join(
    left: &DataFrame,
    right: &DataFrame,
    keys: &[&str],
    kind: JoinKind,
) -> Result<DataFrame> {
    let left_keys = left.require_columns(keys.iter().copied(), "left join key")?;
    let right_keys = right.require_columns(keys.iter().copied(), "right join key")?;

    let key_names: HashSet<&str> = keys.iter().copied().collect();
    let left_shared: HashSet<&str> = left
        .column_names()
        .iter()
        .map(String::as_str)
        .filter(|n| !key_names.contains(n))
        .collect();
    let right_nonkey: Vec<usize> = (0..right.column_count())
        .filter(|i| !right_keys.contains(i))
        .collect();
    let right_shared: HashSet<&str> = right_nonkey
        .iter()
        .map(|&i| right.column_names()[i].as_str())
        .collect();

    // Left columns in order, then right non-key columns; overlapping
    // non-key names get pandas-style _x/_y suffixes.
    let mut columns: Vec<String> = Vec::with_capacity(left.column_count() + right_nonkey.len());
    for name in left.column_names() {
        if !key_names.contains(name.as_str()) && right_shared.contains(name.as_str()) {
            columns.push(format!("{}_x", name));
        } else {
            columns.push(name.clone());
        }
    }
    for &i in &right_nonkey {
        let name = &right.column_names()[i];
        if left_shared.contains(name.as_str()) {
            columns.push(format!("{}_y", name));
        } else {
            columns.push(name.clone());
        }
    }

    // A merged row; either side may be absent.
    let build = |left_row: Option<&[Value]>, right_row: Option<&[Value]>| -> Vec<Value> {
        let mut out: Vec<Value> = Vec::with_capacity(columns.len());
        match left_row {
            Some(row) => out.extend(row.iter().cloned()),
            None => {
                // Right-only row: key cells come from the right side.
                for col in 0..left.column_count() {
                    let cell = left_keys
                        .iter()
                        .position(|&k| k == col)
                        .and_then(|pos| {
                            right_row.and_then(|r| r.get(right_keys[pos]).cloned())
                        })
                        .unwrap_or(Value::Null);
                    out.push(cell);
                }
            }
        }
        for &i in &right_nonkey {
            let cell = right_row
                .and_then(|r| r.get(i).cloned())
                .unwrap_or(Value::Null);
            out.push(cell);
        }
        out
    };

    let mut rows = Vec::new();
    match kind {
        JoinKind::Inner | JoinKind::Left => {
            let right_map = index_rows(right, &right_keys);
            for row in left.rows() {
                match right_map.get(&key_of(row, &left_keys)) {
                    Some(matches) => {
                        for &r in matches {
                            rows.push(build(Some(row), right.row(r)));
                        }
                    }
                    None if kind == JoinKind::Left => rows.push(build(Some(row), None)),
                    None => {}
                }
            }
        }
        JoinKind::Right => {
            let left_map = index_rows(left, &left_keys);
            for row in right.rows() {
                match left_map.get(&key_of(row, &right_keys)) {
                    Some(matches) => {
                        for &l in matches {
                            rows.push(build(left.row(l), Some(row)));
                        }
                    }
                    None => rows.push(build(None, Some(row))),
                }
            }
        }
        JoinKind::Outer => {
            let right_map = index_rows(right, &right_keys);
            let left_keyset: HashSet<Vec<ValueKey>> = left
                .rows()
                .map(|row| key_of(row, &left_keys))
                .collect();
            for row in left.rows() {
                match right_map.get(&key_of(row, &left_keys)) {
                    Some(matches) => {
                        for &r in matches {
                            rows.push(build(Some(row), right.row(r)));
                        }
                    }
                    None => rows.push(build(Some(row), None)),
                }
            }
            for row in right.rows() {
                if !left_keyset.contains(&key_of(row, &right_keys)) {
                    rows.push(build(None, Some(row)));
                }
            }
        }
    }

    log::info!(
        "joined frames: {} rows x {} columns",
        rows.len(),
        columns.len()
    );
    Ok(DataFrame::from_parts(columns, rows))
}

fn key_of(row: &[Value], indices: &[usize]) -> Vec<ValueKey> {
    indices
        .iter()
        .map(|&i| row.get(i).map(Value::key).unwrap_or(ValueKey::Null))
        .collect()
}

fn index_rows(frame: &DataFrame, indices: &[usize]) -> IndexMap<Vec<ValueKey>, Vec<usize>> {
    let mut map: IndexMap<Vec<ValueKey>, Vec<usize>> = IndexMap::new();
    for (idx, row) in frame.rows().enumerate() {
        map.entry(key_of(row, indices)).or_default().push(idx);
    }
    map
}
