//! Delimited-file import and export.

mod delimited;

pub use delimited::{Encoding, ReadOptions, WriteOptions, read_delimited, write_delimited};
