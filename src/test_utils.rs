#![allow(dead_code, missing_docs)]
//! Fixtures for unit tests
use std::fs::File;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

/// Batch with a non-null `id` column and a nullable `name` column
pub fn sample_batch(ids: Range<i32>) -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int32, false),
        Field::new("name", DataType::Utf8, true),
    ]));
    let names: Vec<String> = ids.clone().map(|id| format!("value_{id}")).collect();

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int32Array::from_iter_values(ids)) as ArrayRef,
            Arc::new(StringArray::from(names)) as ArrayRef,
        ],
    )
    .expect("valid sample batch")
}

/// Write each batch as its own row group.
pub fn write_parquet(dir: &Path, name: &str, batches: &[RecordBatch]) -> PathBuf {
    let path = dir.join(name);
    let schema = batches
        .first()
        .map(|b| b.schema())
        .expect("at least one batch");
    let file = File::create(&path).expect("create parquet file");
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, schema, Some(props)).expect("arrow writer");
    for batch in batches {
        writer.write(batch).expect("write batch");
        writer.flush().expect("flush row group");
    }
    writer.close().expect("close writer");
    path
}
