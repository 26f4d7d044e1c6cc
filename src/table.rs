//! In-memory representation of a fully read Parquet file
use std::fmt;

use arrow::compute::concat_batches;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::file::metadata::ParquetMetaData;

use crate::ReadResult;

/// Footer level facts about a Parquet file, available before any data page is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    /// Number of row groups in the file
    pub num_row_groups: usize,
    /// Number of rows as recorded in the footer
    pub num_rows: i64,
    /// Number of leaf columns in the Parquet schema
    pub num_columns: usize,
    /// Application that wrote the file
    pub created_by: Option<String>,
    /// Parquet format version of the file
    pub format_version: i32,
    /// Sum of the compressed sizes of all row groups
    pub compressed_bytes: i64,
    /// Sum of the uncompressed sizes of all row groups
    pub uncompressed_bytes: i64,
}

impl TableSummary {
    /// Collect the summary from decoded footer metadata.
    pub fn from_metadata(metadata: &ParquetMetaData) -> Self {
        let file_metadata = metadata.file_metadata();
        let (compressed_bytes, uncompressed_bytes) = metadata
            .row_groups()
            .iter()
            .fold((0, 0), |(compressed, uncompressed), rg| {
                (
                    compressed + rg.compressed_size(),
                    uncompressed + rg.total_byte_size(),
                )
            });

        Self {
            num_row_groups: metadata.num_row_groups(),
            num_rows: file_metadata.num_rows(),
            num_columns: file_metadata.schema_descr().num_columns(),
            created_by: file_metadata.created_by().map(str::to_string),
            format_version: file_metadata.version(),
            compressed_bytes,
            uncompressed_bytes,
        }
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "row_groups: {}", self.num_row_groups)?;
        writeln!(f, "rows: {}", self.num_rows)?;
        writeln!(f, "columns: {}", self.num_columns)?;
        writeln!(
            f,
            "created_by: {}",
            self.created_by.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "format_version: {}", self.format_version)?;
        writeln!(f, "compressed_bytes: {}", self.compressed_bytes)?;
        write!(f, "uncompressed_bytes: {}", self.uncompressed_bytes)
    }
}

/// A Parquet file materialized in memory as arrow record batches.
#[derive(Debug, Clone)]
pub struct Table {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    summary: TableSummary,
}

impl Table {
    pub(crate) fn new(schema: SchemaRef, batches: Vec<RecordBatch>, summary: TableSummary) -> Self {
        Self {
            schema,
            batches,
            summary,
        }
    }

    /// Arrow schema of the table
    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    /// Record batches in file order
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Consume the table and return its record batches
    pub fn into_batches(self) -> Vec<RecordBatch> {
        self.batches
    }

    /// Footer summary of the file the table was read from
    pub fn summary(&self) -> &TableSummary {
        &self.summary
    }

    /// Total number of rows over all batches
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    /// Number of top level columns
    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    /// Concatenate all batches into a single [`RecordBatch`].
    ///
    /// A table without batches yields an empty batch with the table schema.
    pub fn to_record_batch(&self) -> ReadResult<RecordBatch> {
        Ok(concat_batches(&self.schema, &self.batches)?)
    }

    /// Render the schema, a `----` separator and a grid of all rows.
    ///
    /// Fails when arrow cannot format a value, e.g. a timestamp with an unknown time zone.
    pub fn pretty_format(&self) -> ReadResult<String> {
        let mut out = String::new();
        for field in self.schema.fields() {
            out.push_str(field.name());
            out.push_str(": ");
            out.push_str(&field.data_type().to_string());
            if !field.is_nullable() {
                out.push_str(" not null");
            }
            out.push('\n');
        }
        out.push_str("----");

        if !self.batches.is_empty() {
            let grid = pretty_format_batches(&self.batches)?;
            out.push('\n');
            out.push_str(&grid.to_string());
        }
        Ok(out)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.pretty_format().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
