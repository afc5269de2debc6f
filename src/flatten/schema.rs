//! Field schema inference.
//!
//! Cardinality is a global property: a field that is scalar in one record
//! but a 3-element array in another must reserve 3 columns for every
//! record, or the table stops being rectangular. Inference therefore scans
//! the full record set before any row is projected.

use crate::error::FlattenError;
use crate::flatten::classify::{classify, ValueShape};
use crate::flatten::types::ColumnNaming;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Immutable mapping from field name to cardinality.
///
/// Cardinality is the number of columns a field expands into: 1 for fields
/// only ever seen as scalars, otherwise the maximum array length observed
/// across all records (minimum 1, so an empty array still reserves a
/// column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: BTreeMap<String, usize>,
}

impl FieldSchema {
    /// The cardinality of `field`, if the field was observed at all.
    pub fn cardinality(&self, field: &str) -> Option<usize> {
        self.fields.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over (field, cardinality) pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, usize)> {
        self.fields.iter().map(|(field, &card)| (field, card))
    }

    /// All column names derived from this schema, lexicographically sorted.
    ///
    /// Colliding names collapse to one column; the row template in the
    /// projector is keyed the same way, so header and rows stay aligned.
    pub fn columns(&self, naming: &ColumnNaming) -> Vec<String> {
        let mut columns = Vec::new();
        for (field, card) in self.iter() {
            if card == 1 {
                columns.push(field.clone());
            } else {
                for index in 0..card {
                    columns.push(naming.column(field, index));
                }
            }
        }
        columns.sort();
        columns.dedup();
        columns
    }
}

/// Infer the [`FieldSchema`] for a record set.
///
/// A pure fold: scalar values contribute cardinality 1, vectors contribute
/// `max(length, 1)`, and each field keeps the maximum contribution seen.
/// Any value that is neither scalar nor a flat array of scalars aborts the
/// whole conversion with [`FlattenError::UnsupportedValue`].
pub fn infer_schema(records: &[&Map<String, Value>]) -> Result<FieldSchema, FlattenError> {
    let mut fields: BTreeMap<String, usize> = BTreeMap::new();

    for record in records {
        for (field, value) in record.iter() {
            let candidate = match classify(value) {
                ValueShape::Scalar(_) => 1,
                ValueShape::Vector(items) => items.len().max(1),
                ValueShape::Unsupported(found) => {
                    return Err(FlattenError::UnsupportedValue {
                        field: field.clone(),
                        found,
                    });
                }
            };

            let stored = fields.entry(field.clone()).or_insert(1);
            *stored = (*stored).max(candidate);
        }
    }

    Ok(FieldSchema { fields })
}
