//! Trailing multi-year window aggregation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};
use crate::frame::{DataFrame, Value, ValueKey};

/// Configuration for [`aggregate_year_windows`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowOptions {
    /// Columns to group by.
    pub group_columns: Vec<String>,
    /// Window length in years. The window for target year `y` is
    /// `[y - window + 1, y]`, inclusive on both ends.
    pub window: u32,
    /// Give the smallest target year a `[y, y]` window instead of the full
    /// window, so it never reaches back before the data starts.
    pub single_year_first: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            group_columns: vec!["country".to_string()],
            window: 5,
            single_year_first: true,
        }
    }
}

/// Sum numeric columns over trailing year windows ending at each target year.
///
/// For every target year, rows whose `year` falls inside the window are
/// grouped by `options.group_columns` and each column in `sum_columns` is
/// summed; missing and non-numeric cells contribute zero. The per-year
/// results are concatenated (the same group appears once per target year),
/// aggregated columns are renamed `<name>_sum`, and the output is sorted by
/// the grouping columns then year.
pub fn aggregate_year_windows(
    frame: &DataFrame,
    target_years: &[i64],
    sum_columns: &[&str],
    options: &WindowOptions,
) -> Result<DataFrame> {
    let year_idx = frame.column_index("year").ok_or_else(|| {
        TidyError::Validation("the frame needs a 'year' column".to_string())
    })?;
    let group_idx =
        frame.require_columns(options.group_columns.iter().map(String::as_str), "grouping")?;
    let sum_idx = frame.require_columns(sum_columns.iter().copied(), "aggregation")?;

    let mut targets = target_years.to_vec();
    targets.sort_unstable();
    let Some(&min_year) = targets.first() else {
        return Err(TidyError::Validation(
            "target_years must not be empty".to_string(),
        ));
    };

    // Coerce the year column up front so a bad cell fails before any
    // aggregation is produced.
    let mut years: Vec<i64> = Vec::with_capacity(frame.row_count());
    for (idx, row) in frame.rows().enumerate() {
        let cell = row.get(year_idx).cloned().unwrap_or(Value::Null);
        match cell.as_i64() {
            Some(year) => years.push(year),
            None => {
                return Err(TidyError::Validation(format!(
                    "year value '{}' in row {} is not an integer",
                    cell, idx
                )));
            }
        }
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for &target in &targets {
        let start = if options.single_year_first && target == min_year {
            target
        } else {
            target - (options.window as i64 - 1)
        };

        // Group rows inside [start, target], first-seen group order.
        let mut groups: IndexMap<Vec<ValueKey>, (Vec<Value>, Vec<f64>)> = IndexMap::new();
        for (row, &year) in frame.rows().zip(&years) {
            if year < start || year > target {
                continue;
            }
            let key: Vec<ValueKey> = group_idx
                .iter()
                .map(|&i| row.get(i).map(Value::key).unwrap_or(ValueKey::Null))
                .collect();
            let entry = groups.entry(key).or_insert_with(|| {
                let labels = group_idx
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or(Value::Null))
                    .collect();
                (labels, vec![0.0; sum_idx.len()])
            });
            for (slot, &i) in entry.1.iter_mut().zip(&sum_idx) {
                let cell = row.get(i);
                if let Some(v) = cell.filter(|v| !v.is_null()).and_then(Value::as_f64) {
                    *slot += v;
                }
            }
        }

        for (labels, sums) in groups.into_values() {
            let mut out: Vec<Value> = Vec::with_capacity(labels.len() + 1 + sums.len());
            out.extend(labels);
            out.push(Value::Int(target));
            out.extend(sums.into_iter().map(Value::Float));
            rows.push(out);
        }
    }

    let mut columns: Vec<String> = options.group_columns.clone();
    columns.push("year".to_string());
    columns.extend(sum_columns.iter().map(|name| format!("{}_sum", name)));

    let mut result = DataFrame::from_parts(columns, rows);
    let sort_idx: Vec<usize> = (0..=group_idx.len()).collect();
    result.sort_by_columns(&sort_idx);
    Ok(result)
}
