//! Open a Parquet file and materialize it as a [`Table`]
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::{RecordBatch, RecordBatchReader};
use parquet::arrow::arrow_reader::{ArrowReaderOptions, ParquetRecordBatchReaderBuilder};
use tracing::{debug, info};

use crate::table::{Table, TableSummary};
use crate::{ReadError, ReadResult};

/// Number of rows per record batch unless configured otherwise
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Configuration handed to every reader explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    batch_size: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ReadOptions {
    /// Options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of rows per record batch. Zero is raised to one.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Configured batch size
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

/// Open `path` read-only.
pub fn open_file(path: impl AsRef<Path>) -> ReadResult<File> {
    let path = path.as_ref();
    let start = Instant::now();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened {} in {:?}", path.display(), start.elapsed());
    Ok(file)
}

/// Reader bound to an open Parquet file whose footer has been decoded.
///
/// The file handle is owned by the reader and closed when it is dropped or consumed by
/// [`TableFileReader::read_table`].
pub struct TableFileReader {
    path: PathBuf,
    builder: ParquetRecordBatchReaderBuilder<File>,
    options: ReadOptions,
}

impl std::fmt::Debug for TableFileReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableFileReader")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl TableFileReader {
    /// Open `path` and decode its footer.
    pub fn open(path: impl AsRef<Path>, options: &ReadOptions) -> ReadResult<Self> {
        let file = open_file(path.as_ref())?;
        Self::try_new(path, file, options)
    }

    /// Build a reader over an already opened `file`. `path` is only used for diagnostics.
    pub fn try_new(
        path: impl AsRef<Path>,
        file: File,
        options: &ReadOptions,
    ) -> ReadResult<Self> {
        let path = path.as_ref().to_path_buf();
        let start = Instant::now();
        let builder =
            ParquetRecordBatchReaderBuilder::try_new_with_options(file, ArrowReaderOptions::new())
                .map_err(|source| ReadError::InvalidFile {
                    path: path.clone(),
                    source,
                })?;
        debug!(
            "decoded footer of {} in {:?}: {} row groups",
            path.display(),
            start.elapsed(),
            builder.metadata().num_row_groups()
        );

        Ok(Self {
            path,
            builder,
            options: options.clone(),
        })
    }

    /// Arrow schema the file will be read with
    pub fn schema(&self) -> SchemaRef {
        self.builder.schema().clone()
    }

    /// Footer summary of the file
    pub fn summary(&self) -> TableSummary {
        TableSummary::from_metadata(self.builder.metadata())
    }

    /// Read every row group of the file into memory.
    pub fn read_table(self) -> ReadResult<Table> {
        let summary = self.summary();
        let Self {
            path,
            builder,
            options,
        } = self;

        let start = Instant::now();
        let reader = builder
            .with_batch_size(options.batch_size())
            .build()
            .map_err(|source| ReadError::InvalidFile {
                path: path.clone(),
                source,
            })?;
        let schema = reader.schema();
        let batches = reader
            .collect::<Result<Vec<RecordBatch>, _>>()
            .map_err(|source| ReadError::Read {
                path: path.clone(),
                source,
            })?;

        let table = Table::new(schema, batches, summary);
        info!(
            "read {} rows in {} batches from {} in {:?}",
            table.num_rows(),
            table.batches().len(),
            path.display(),
            start.elapsed()
        );
        Ok(table)
    }
}

/// Open the file at `path` and read it fully into memory.
pub fn read_parquet(path: impl AsRef<Path>, options: &ReadOptions) -> ReadResult<Table> {
    TableFileReader::open(path, options)?.read_table()
}
