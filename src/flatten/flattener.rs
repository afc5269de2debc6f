use crate::error::FlattenError;
use crate::flatten::classify::json_type_name;
use crate::flatten::projector::project_record;
use crate::flatten::schema::infer_schema;
use crate::flatten::types::{FlattenConfig, Table};
use crate::path::{join_path, resolve_path};
use serde_json::{Map, Value};

/// The core converter: resolves the record array inside a document, infers
/// the field schema, and projects every record onto it.
pub struct JsonFlattener {
    config: FlattenConfig,
}

impl JsonFlattener {
    pub fn new(config: FlattenConfig) -> Self {
        JsonFlattener { config }
    }

    /// Flatten the record array at the configured path into a [`Table`].
    ///
    /// Runs in two passes: schema inference over all records, then one
    /// projection per record. Any error leaves no partial table behind.
    pub fn flatten(&self, doc: &Value) -> Result<Table, FlattenError> {
        let target = resolve_path(doc, &self.config.path)?;
        let records = self.records(target)?;

        let schema = infer_schema(&records)?;
        let columns = schema.columns(&self.config.naming);
        let rows = records
            .iter()
            .map(|record| project_record(&schema, &self.config.naming, record))
            .collect();

        Ok(Table { columns, rows })
    }

    /// Check that the resolved value is an array of objects and borrow the
    /// records out of it.
    fn records<'a>(&self, target: &'a Value) -> Result<Vec<&'a Map<String, Value>>, FlattenError> {
        let Value::Array(items) = target else {
            return Err(FlattenError::UnsupportedRoot {
                path: join_path(&self.config.path),
                found: json_type_name(target),
            });
        };

        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(FlattenError::NonRecordElement {
                    path: join_path(&self.config.path),
                    element: other.to_string(),
                }),
            })
            .collect()
    }
}
