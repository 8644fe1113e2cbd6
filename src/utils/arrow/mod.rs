//! Arrow utilities
//!
//! Column projection and text casting shared by the CSV and Parquet loaders.

pub mod array_utils;

pub use array_utils::{all_text_schema, get_text_column, project_text_columns};
