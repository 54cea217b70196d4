//! tidytable: tabular-data helpers for exploratory analysis.
//!
//! A small set of stateless, composable routines over an in-memory
//! [`DataFrame`]: missing-value and duplicate-row analysis, delimited-file
//! import/export, relational joins, a guarded single-column rename, a
//! wide-to-long reshape over year-encoded column names, and numeric
//! aggregation over trailing year windows.
//!
//! Every helper is a pure transformation: it borrows its input, validates
//! the columns it needs up front, and returns a fresh frame (the in-place
//! rename is the one sanctioned mutation). There is no shared state across
//! calls.
//!
//! # Example
//!
//! ```
//! use tidytable::{DataFrame, MeltOptions, Value, wide_to_long};
//!
//! let wide = DataFrame::new(
//!     vec!["country".into(), "1952".into(), "1957".into()],
//!     vec![vec![
//!         Value::Str("Brazil".into()),
//!         Value::Int(10),
//!         Value::Int(20),
//!     ]],
//! )?;
//!
//! let long = wide_to_long(&wide, &["country"], &MeltOptions::default())?;
//! assert_eq!(long.column_names(), ["country", "year", "value"]);
//! assert_eq!(long.row_count(), 2);
//! # Ok::<(), tidytable::TidyError>(())
//! ```

pub mod analyze;
pub mod error;
pub mod frame;
pub mod io;
pub mod ops;
pub mod reshape;

pub use analyze::{DuplicateReport, drop_duplicates, find_duplicates, missing_value_summary};
pub use error::{Result, TidyError};
pub use frame::{DataFrame, Value};
pub use io::{Encoding, ReadOptions, WriteOptions, read_delimited, write_delimited};
pub use ops::{JoinKind, OnMissing, RenameOptions, join, rename_column, rename_column_in_place};
pub use reshape::{MeltOptions, WindowOptions, aggregate_year_windows, wide_to_long};
