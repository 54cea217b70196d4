//! Per-column missing-value summary.

use crate::frame::{DataFrame, Value};

/// Summarize missing values per column.
///
/// Returns a frame with columns `{column, missing_count, missing_percent}`
/// and one row for each input column that has at least one missing value,
/// in input column order. Columns with no missing values are excluded.
///
/// The percentage is rounded to 2 decimals and then formatted to 1 decimal
/// with a trailing `%`, e.g. `"30.0%"`.
pub fn missing_value_summary(frame: &DataFrame) -> DataFrame {
    let columns = vec![
        "column".to_string(),
        "missing_count".to_string(),
        "missing_percent".to_string(),
    ];
    let total = frame.row_count();
    if total == 0 {
        return DataFrame::empty(columns);
    }

    let mut rows = Vec::new();
    for (idx, name) in frame.column_names().iter().enumerate() {
        let count = frame.column_values(idx).filter(|v| v.is_null()).count();
        if count == 0 {
            continue;
        }
        let percent = (count as f64 / total as f64) * 100.0;
        let percent = (percent * 100.0).round() / 100.0;
        rows.push(vec![
            Value::Str(name.clone()),
            Value::Int(count as i64),
            Value::Str(format!("{:.1}%", percent)),
        ]);
    }

    DataFrame::from_parts(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_columns_with_missing_values_reported() {
        let mut rows = Vec::new();
        for i in 0..10 {
            let b = if i < 3 { Value::Null } else { Value::Int(i) };
            rows.push(vec![Value::Int(i), b]);
        }
        let frame = DataFrame::new(vec!["A".to_string(), "B".to_string()], rows).unwrap();

        let summary = missing_value_summary(&frame);
        assert_eq!(summary.row_count(), 1);
        assert_eq!(summary.get(0, 0), Some(&Value::Str("B".to_string())));
        assert_eq!(summary.get(0, 1), Some(&Value::Int(3)));
        assert_eq!(summary.get(0, 2), Some(&Value::Str("30.0%".to_string())));
    }

    #[test]
    fn test_two_stage_rounding() {
        // 1 of 3 rows missing: 33.333...% -> 33.33 -> "33.3%"
        let frame = DataFrame::new(
            vec!["x".to_string()],
            vec![
                vec![Value::Null],
                vec![Value::Int(1)],
                vec![Value::Int(2)],
            ],
        )
        .unwrap();
        let summary = missing_value_summary(&frame);
        assert_eq!(summary.get(0, 2), Some(&Value::Str("33.3%".to_string())));
    }

    #[test]
    fn test_empty_frame() {
        let frame = DataFrame::empty(vec!["a".to_string()]);
        let summary = missing_value_summary(&frame);
        assert_eq!(summary.row_count(), 0);
        assert_eq!(summary.column_count(), 3);
    }
}
