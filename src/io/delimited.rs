//! Delimited text import/export with configurable delimiter and encoding.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};
use crate::frame::{DataFrame, Value};

/// Text encoding of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// UTF-8 (the default).
    Utf8,
    /// Windows-1252, a superset of Latin-1.
    Windows1252,
}

/// Import configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Text encoding of the file.
    pub encoding: Encoding,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            encoding: Encoding::Utf8,
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Text encoding to write.
    pub encoding: Encoding,
    /// Whether to prepend a synthetic 0-based row-index column.
    pub write_index: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            encoding: Encoding::Utf8,
            write_index: false,
        }
    }
}

/// Read a delimited text file into a data frame.
///
/// The first row is the header. Short rows are padded with nulls and long
/// rows truncated to the header width. A file with a header and no data
/// rows is a valid empty frame.
pub fn read_delimited(path: impl AsRef<Path>, options: &ReadOptions) -> Result<DataFrame> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| TidyError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = decode(&bytes, options.encoding)?;
    if text.trim().is_empty() {
        return Err(TidyError::EmptyData(format!(
            "'{}' has no content",
            path.display()
        )));
    }

    let frame = parse_text(&text, options.delimiter)?;
    log::info!(
        "imported '{}': {} rows x {} columns",
        path.display(),
        frame.row_count(),
        frame.column_count()
    );
    Ok(frame)
}

/// Parse delimited text directly.
fn parse_text(text: &str, delimiter: u8) -> Result<DataFrame> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    if columns.is_empty() {
        return Err(TidyError::EmptyData("no columns found".to_string()));
    }

    let width = columns.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<Value> = record.iter().map(Value::parse).collect();
        while row.len() < width {
            row.push(Value::Null);
        }
        row.truncate(width);
        rows.push(row);
    }

    Ok(DataFrame::from_parts(columns, rows))
}

/// Write a data frame as delimited text.
pub fn write_delimited(
    frame: &DataFrame,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(Vec::new());

    let mut header: Vec<String> = Vec::with_capacity(frame.column_count() + 1);
    if options.write_index {
        // pandas-style unnamed index column
        header.push(String::new());
    }
    header.extend(frame.column_names().iter().cloned());
    writer.write_record(&header)?;

    for (idx, row) in frame.rows().enumerate() {
        let mut record: Vec<String> = Vec::with_capacity(row.len() + 1);
        if options.write_index {
            record.push(idx.to_string());
        }
        record.extend(row.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|e| TidyError::Io {
        path: path.to_path_buf(),
        source: e.into_error(),
    })?;
    let bytes = encode(bytes, options.encoding)?;
    fs::write(path, bytes).map_err(|e| TidyError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::info!(
        "exported {} rows x {} columns to '{}'",
        frame.row_count(),
        frame.column_count(),
        path.display()
    );
    Ok(())
}

fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|e| TidyError::Decode(format!("invalid UTF-8: {}", e))),
        Encoding::Windows1252 => {
            let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
            if had_errors {
                return Err(TidyError::Decode(
                    "invalid Windows-1252 byte sequence".to_string(),
                ));
            }
            Ok(text.into_owned())
        }
    }
}

fn encode(bytes: Vec<u8>, encoding: Encoding) -> Result<Vec<u8>> {
    match encoding {
        Encoding::Utf8 => Ok(bytes),
        Encoding::Windows1252 => {
            let text = String::from_utf8(bytes)
                .map_err(|e| TidyError::Decode(format!("invalid UTF-8: {}", e)))?;
            let (encoded, _, had_errors) = encoding_rs::WINDOWS_1252.encode(&text);
            if had_errors {
                return Err(TidyError::Decode(
                    "text contains characters not representable in Windows-1252".to_string(),
                ));
            }
            Ok(encoded.into_owned())
        }
    }
}
