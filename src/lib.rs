//! Read a Parquet file fully into memory as an arrow table
//!
//! # Usage
//!
//! Read a file and print it:
//!
//! ```rust,no_run
//! use parquet_reader::{read_parquet, ReadOptions};
//!
//! let table = read_parquet("data.parquet", &ReadOptions::default()).unwrap();
//! println!("{table}");
//! ```
//!
//! Inspect the footer before decoding any data page:
//!
//! ```rust,no_run
//! use parquet_reader::{ReadOptions, TableFileReader};
//!
//! let reader = TableFileReader::open("data.parquet", &ReadOptions::new().with_batch_size(8192)).unwrap();
//! println!("{}", reader.summary());
//! let table = reader.read_table().unwrap();
//! ```

#![deny(missing_docs)]

pub mod errors;
pub mod reader;
pub mod table;

#[cfg(test)]
pub(crate) mod test_utils;

pub use self::errors::{ReadError, ReadResult};
pub use self::reader::{open_file, read_parquet, ReadOptions, TableFileReader, DEFAULT_BATCH_SIZE};
pub use self::table::{Table, TableSummary};

// convenience exports for consumers to avoid aligning crate versions
pub use arrow;
pub use parquet;
