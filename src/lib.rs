//! # Flatiron - JSON record arrays to CSV tables
//!
//! Flattens a JSON array of records into a single CSV table, expanding
//! array-valued fields into multiple indexed columns. Records may disagree
//! on which fields they carry and on array lengths; the output is always
//! rectangular, with columns in lexicographic order.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatiron::{FlattenConfig, JsonFlattener};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let doc = json!([
//!     {"a": 1, "b": [10, 20]},
//!     {"a": 2, "b": [30]}
//! ]);
//!
//! let flattener = JsonFlattener::new(FlattenConfig::default());
//! let table = flattener.flatten(&doc)?;
//!
//! assert_eq!(table.columns, vec!["a", "b_0", "b_1"]);
//! // rows: [1, 10, 20] and [2, 30, <empty>]
//! # Ok(())
//! # }
//! ```
//!
//! ## Record arrays nested inside a document
//!
//! ```rust
//! use flatiron::{ColumnNaming, FlattenConfig, JsonFlattener};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let doc = json!({"results": [{"x": "hi"}]});
//!
//! let config = FlattenConfig {
//!     path: vec!["results".to_string()],
//!     naming: ColumnNaming::default(),
//! };
//! let table = JsonFlattener::new(config).flatten(&doc)?;
//! assert_eq!(table.columns, vec!["x"]);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;

pub mod error;
pub mod flatten;
pub mod path;

// Re-export commonly used types for convenience
pub use error::FlattenError;
pub use flatten::{
    ColumnNaming, FieldSchema, FlattenConfig, JsonFlattener, Table, ValueShape, write_table,
    write_table_to_file,
};
pub use path::resolve_path;

/// Main entry point: parse a JSON document from a reader and flatten the
/// record array at the configured path into a [`Table`].
pub fn flatten_json<R: Read>(reader: R, config: FlattenConfig) -> Result<Table> {
    let doc: Value = serde_json::from_reader(reader).context("Failed to parse JSON")?;

    let flattener = JsonFlattener::new(config);
    let table = flattener.flatten(&doc)?;
    Ok(table)
}
