//! Utilities for working with Arrow arrays.
//!
//! Skill table columns arrive as text from CSV and as text or numbers from
//! Parquet. Every column the loader needs is pulled out by name and cast to
//! `Utf8` so a single row type can deserialize them.

use std::path::Path;
use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::compute::cast;
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema};

use crate::error::{CareerGraphError, Result};

/// Get a column by name, cast to `Utf8`
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `source` - File the batch was read from, used in error messages
pub fn get_text_column(batch: &RecordBatch, column_name: &str, source: &Path) -> Result<ArrayRef> {
    let idx = batch.schema().index_of(column_name).map_err(|_| {
        CareerGraphError::schema_error(source, format!("Missing required column '{column_name}'"))
    })?;

    let column = batch.column(idx);
    if column.data_type() == &DataType::Utf8 {
        return Ok(Arc::clone(column));
    }

    cast(column, &DataType::Utf8).map_err(|e| {
        CareerGraphError::schema_error(
            source,
            format!(
                "Column '{column_name}' of type {} cannot be read as text: {e}",
                column.data_type()
            ),
        )
    })
}

/// Build a batch containing only `columns`, each cast to `Utf8`
pub fn project_text_columns(
    batch: &RecordBatch,
    columns: &[&str],
    source: &Path,
) -> Result<RecordBatch> {
    let arrays = columns
        .iter()
        .map(|name| get_text_column(batch, name, source))
        .collect::<Result<Vec<_>>>()?;

    let fields: Vec<Field> = columns
        .iter()
        .map(|name| Field::new(*name, DataType::Utf8, true))
        .collect();

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
}

/// Schema with the same column names as `schema`, all typed as nullable `Utf8`
#[must_use]
pub fn all_text_schema(schema: &Schema) -> Schema {
    Schema::new(
        schema
            .fields()
            .iter()
            .map(|f| Field::new(f.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Float64Array, StringArray};

    #[test]
    fn test_project_text_columns_casts_numbers() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("Occupation", DataType::Utf8, false),
            Field::new("Extra", DataType::Utf8, true),
            Field::new("Skills Covered", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["Dancers"])),
                Arc::new(StringArray::from(vec!["ignored"])),
                Arc::new(Float64Array::from(vec![75.0])),
            ],
        )
        .unwrap();

        let projected =
            project_text_columns(&batch, &["Occupation", "Skills Covered"], Path::new("t.parquet"))
                .unwrap();
        assert_eq!(projected.num_columns(), 2);
        let coverage = projected
            .column(1)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(coverage.len(), 1);
        assert!(coverage.value(0).starts_with("75"));
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let schema = Arc::new(Schema::new(vec![Field::new("Occupation", DataType::Utf8, false)]));
        let batch =
            RecordBatch::try_new(schema, vec![Arc::new(StringArray::from(vec!["Dancers"]))]).unwrap();

        let err = get_text_column(&batch, "Code", Path::new("t.csv")).unwrap_err();
        assert!(matches!(err, CareerGraphError::SchemaError { .. }));
    }
}
