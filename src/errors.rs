//! Errors raised while reading a Parquet file into memory
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// A result returned by the reader
pub type ReadResult<T> = Result<T, ReadError>;

/// Parquet reader specific error
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// Error returned when the input file cannot be opened.
    #[error("Failed to open {}: {}", .path.display(), .source)]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// IO error details returned by the operating system
        source: std::io::Error,
    },

    /// Error returned when the file is not recognized as a Parquet file.
    #[error("Invalid parquet file {}: {}", .path.display(), .source)]
    InvalidFile {
        /// Path of the rejected file
        path: PathBuf,
        /// Parquet error details returned when decoding the footer failed.
        source: ParquetError,
    },

    /// Error returned when decoding the row groups of the file failed.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read {
        /// Path of the file being materialized
        path: PathBuf,
        /// Arrow error details returned by the record batch reader.
        source: ArrowError,
    },

    /// Error returned by an in-memory arrow operation on an already read table.
    #[error("Arrow error: {}", .source)]
    Arrow {
        /// Arrow error details
        #[from]
        source: ArrowError,
    },
}

impl ReadError {
    /// Path of the file the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Open { path, .. } | Self::InvalidFile { path, .. } | Self::Read { path, .. } => {
                Some(path.as_path())
            }
            Self::Arrow { .. } => None,
        }
    }
}
