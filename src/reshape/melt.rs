//! Wide-to-long reshape over year-encoded column names.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};
use crate::frame::{DataFrame, Value};

/// Column names that are exactly four digits, e.g. `1952`.
static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

/// Configuration for [`wide_to_long`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeltOptions {
    /// Explicit year-bearing columns. When `None`, columns are auto-detected.
    pub year_columns: Option<Vec<String>>,
    /// Pattern extracting a year token from a column name; the first capture
    /// group is the token.
    pub year_pattern: String,
    /// Name of the output year column.
    pub year_name: String,
    /// Name of the output value column.
    pub value_name: String,
    /// Drop output rows whose value is missing.
    pub drop_missing: bool,
    /// Parse year tokens as integers, falling back to text per row.
    pub coerce_year: bool,
}

impl Default for MeltOptions {
    fn default() -> Self {
        Self {
            year_columns: None,
            year_pattern: r"(\d{4})".to_string(),
            year_name: "year".to_string(),
            value_name: "value".to_string(),
            drop_missing: true,
            coerce_year: true,
        }
    }
}

/// Convert a wide frame (one column per year) into long form
/// (one row per entity and year).
///
/// Year columns are taken from `options.year_columns` when given; otherwise
/// columns named exactly four digits are used, falling back to columns whose
/// name contains a match of `options.year_pattern`. Output columns are the
/// identifiers, then the year, then the value, sorted by identifiers and
/// year ascending.
pub fn wide_to_long(
    frame: &DataFrame,
    id_columns: &[&str],
    options: &MeltOptions,
) -> Result<DataFrame> {
    let id_idx = frame.require_columns(id_columns.iter().copied(), "identifier")?;
    let pattern = Regex::new(&options.year_pattern)?;

    let year_cols: Vec<usize> = match &options.year_columns {
        Some(names) => frame.require_columns(names.iter().map(String::as_str), "year")?,
        None => detect_year_columns(frame, &pattern),
    };
    if year_cols.is_empty() {
        return Err(TidyError::Validation(
            "no year columns identified; pass year_columns explicitly or adjust year_pattern"
                .to_string(),
        ));
    }

    let tokens: Vec<String> = year_cols
        .iter()
        .map(|&col| year_token(&frame.column_names()[col], &pattern))
        .collect();

    let mut rows = Vec::with_capacity(frame.row_count() * year_cols.len());
    for row in frame.rows() {
        for (pos, &col) in year_cols.iter().enumerate() {
            let value = row.get(col).cloned().unwrap_or(Value::Null);
            if options.drop_missing && value.is_null() {
                continue;
            }
            let mut out: Vec<Value> = Vec::with_capacity(id_idx.len() + 2);
            for &i in &id_idx {
                out.push(row.get(i).cloned().unwrap_or(Value::Null));
            }
            out.push(year_value(&tokens[pos], options.coerce_year));
            out.push(value);
            rows.push(out);
        }
    }

    let mut columns: Vec<String> = id_idx
        .iter()
        .map(|&i| frame.column_names()[i].clone())
        .collect();
    columns.push(options.year_name.clone());
    columns.push(options.value_name.clone());

    let mut long = DataFrame::from_parts(columns, rows);
    let sort_idx: Vec<usize> = (0..=id_idx.len()).collect();
    long.sort_by_columns(&sort_idx);
    Ok(long)
}

/// Auto-detect year columns: exact four-digit names first, then any name
/// containing a pattern match.
fn detect_year_columns(frame: &DataFrame, pattern: &Regex) -> Vec<usize> {
    let exact: Vec<usize> = frame
        .column_names()
        .iter()
        .enumerate()
        .filter(|(_, name)| FOUR_DIGITS.is_match(name))
        .map(|(i, _)| i)
        .collect();
    if !exact.is_empty() {
        return exact;
    }
    frame
        .column_names()
        .iter()
        .enumerate()
        .filter(|(_, name)| pattern.is_match(name))
        .map(|(i, _)| i)
        .collect()
}

/// Extract the year token from a column name.
///
/// Takes the first capture group (the whole match when the pattern has no
/// group); a bare four-digit name is used directly. The last resort keeps
/// the literal column name as the token, which is almost certainly not a
/// year and is logged as unusual.
fn year_token(name: &str, pattern: &Regex) -> String {
    if let Some(caps) = pattern.captures(name) {
        return caps
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or(&caps[0])
            .to_string();
    }
    if !FOUR_DIGITS.is_match(name) {
        log::warn!(
            "column '{}' contains no year token; using the literal column name",
            name
        );
    }
    name.to_string()
}

fn year_value(token: &str, coerce: bool) -> Value {
    if coerce {
        if let Ok(year) = token.trim().parse::<i64>() {
            return Value::Int(year);
        }
    }
    Value::Str(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> DataFrame {
        DataFrame::new(
            vec![
                "country".to_string(),
                "1957".to_string(),
                "1952".to_string(),
            ],
            vec![vec![
                Value::Str("Brazil".to_string()),
                Value::Int(20),
                Value::Int(10),
            ]],
        )
        .unwrap()
    }

    #[test]
    fn test_reshape_exact_year_columns() {
        let long = wide_to_long(&wide(), &["country"], &MeltOptions::default()).unwrap();
        assert_eq!(long.column_names(), ["country", "year", "value"]);
        assert_eq!(long.row_count(), 2);
        // sorted by country then year
        assert_eq!(long.row(0).unwrap()[1], Value::Int(1952));
        assert_eq!(long.row(0).unwrap()[2], Value::Int(10));
        assert_eq!(long.row(1).unwrap()[1], Value::Int(1957));
        assert_eq!(long.row(1).unwrap()[2], Value::Int(20));
    }

    #[test]
    fn test_detection_falls_back_to_pattern() {
        let frame = DataFrame::new(
            vec![
                "country".to_string(),
                "deaths_1952".to_string(),
                "deaths_1957".to_string(),
            ],
            vec![vec![
                Value::Str("Chad".to_string()),
                Value::Int(1),
                Value::Int(2),
            ]],
        )
        .unwrap();
        let long = wide_to_long(&frame, &["country"], &MeltOptions::default()).unwrap();
        assert_eq!(long.row_count(), 2);
        assert_eq!(long.row(0).unwrap()[1], Value::Int(1952));
    }

    #[test]
    fn test_explicit_year_columns_bypass_detection() {
        let options = MeltOptions {
            year_columns: Some(vec!["1952".to_string()]),
            ..MeltOptions::default()
        };
        let long = wide_to_long(&wide(), &["country"], &options).unwrap();
        assert_eq!(long.row_count(), 1);
        assert_eq!(long.row(0).unwrap()[1], Value::Int(1952));
    }

    #[test]
    fn test_literal_name_fallback_keeps_text_token() {
        let frame = DataFrame::new(
            vec!["country".to_string(), "total".to_string()],
            vec![vec![Value::Str("Chad".to_string()), Value::Int(5)]],
        )
        .unwrap();
        let options = MeltOptions {
            year_columns: Some(vec!["total".to_string()]),
            ..MeltOptions::default()
        };
        let long = wide_to_long(&frame, &["country"], &options).unwrap();
        assert_eq!(long.row(0).unwrap()[1], Value::Str("total".to_string()));
    }

    #[test]
    fn test_drop_missing() {
        let frame = DataFrame::new(
            vec![
                "country".to_string(),
                "1952".to_string(),
                "1957".to_string(),
            ],
            vec![vec![
                Value::Str("Chad".to_string()),
                Value::Null,
                Value::Int(2),
            ]],
        )
        .unwrap();
        let long = wide_to_long(&frame, &["country"], &MeltOptions::default()).unwrap();
        assert_eq!(long.row_count(), 1);
        assert_eq!(long.row(0).unwrap()[1], Value::Int(1957));

        let keep = MeltOptions {
            drop_missing: false,
            ..MeltOptions::default()
        };
        let long = wide_to_long(&frame, &["country"], &keep).unwrap();
        assert_eq!(long.row_count(), 2);
        assert_eq!(long.row(0).unwrap()[2], Value::Null);
    }

    #[test]
    fn test_missing_identifier_is_validation_error() {
        let err = wide_to_long(&wide(), &["region"], &MeltOptions::default()).unwrap_err();
        assert!(err.to_string().contains("region"));
    }

    #[test]
    fn test_no_year_columns_is_validation_error() {
        let frame = DataFrame::new(
            vec!["country".to_string(), "total".to_string()],
            vec![vec![Value::Str("Chad".to_string()), Value::Int(5)]],
        )
        .unwrap();
        let err = wide_to_long(&frame, &["country"], &MeltOptions::default()).unwrap_err();
        assert!(err.to_string().contains("no year columns"));
    }

    #[test]
    fn test_coerce_year_disabled_keeps_text() {
        let options = MeltOptions {
            coerce_year: false,
            ..MeltOptions::default()
        };
        let long = wide_to_long(&wide(), &["country"], &options).unwrap();
        assert_eq!(long.row(0).unwrap()[1], Value::Str("1952".to_string()));
    }

    #[test]
    fn test_bad_pattern_is_regex_error() {
        let options = MeltOptions {
            year_pattern: "(".to_string(),
            ..MeltOptions::default()
        };
        let err = wide_to_long(&wide(), &["country"], &options).unwrap_err();
        assert!(matches!(err, TidyError::Regex(_)));
    }
}
