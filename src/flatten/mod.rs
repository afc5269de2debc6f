//! JSON flattening - project an array of records onto a rectangular CSV
//! schema.
//!
//! Conversion runs in two passes over the record array: schema inference
//! (field name → cardinality, the number of columns the field expands
//! into), then projection of every record onto the sorted superset column
//! schema. The two-pass shape is required because cardinality is a global
//! property of the record set, not of any single record.

pub mod classify;
pub mod flattener;
pub mod projector;
pub mod schema;
pub mod types;
pub mod writer;

pub use classify::{classify, json_type_name, ValueShape};
pub use flattener::JsonFlattener;
pub use projector::{normalize_scalar, project_record};
pub use schema::{infer_schema, FieldSchema};
pub use types::{ColumnNaming, FlattenConfig, Table};
pub use writer::{write_table, write_table_to_file};
