//! Record projection onto the inferred schema.
//!
//! Every record becomes one row with exactly one cell per column, in the
//! same lexicographic column order as the header.

use crate::flatten::classify::{classify, ValueShape};
use crate::flatten::schema::FieldSchema;
use crate::flatten::types::ColumnNaming;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Project one record onto the schema's column set.
///
/// Columns whose field is absent from the record, and array positions past
/// the end of a record's vector, keep the missing sentinel (`None`). A
/// scalar supplied for a multi-cardinality field lands in index 0 and the
/// remaining columns stay empty.
pub fn project_record(
    schema: &FieldSchema,
    naming: &ColumnNaming,
    record: &Map<String, Value>,
) -> Vec<Option<String>> {
    // Row template keyed by column name. BTreeMap iteration is
    // lexicographic, matching the sorted header.
    let mut cells: BTreeMap<String, Option<String>> = BTreeMap::new();
    for (field, card) in schema.iter() {
        if card == 1 {
            cells.insert(field.clone(), None);
        } else {
            for index in 0..card {
                cells.insert(naming.column(field, index), None);
            }
        }
    }

    for (field, value) in record.iter() {
        // Inference saw every record, so the field is always in the schema
        // and unsupported shapes were already rejected.
        let Some(card) = schema.cardinality(field) else {
            continue;
        };

        if card == 1 {
            let cell = match classify(value) {
                ValueShape::Scalar(scalar) => Some(normalize_scalar(scalar)),
                ValueShape::Vector(items) => items.first().map(normalize_scalar),
                ValueShape::Unsupported(_) => None,
            };
            cells.insert(field.clone(), cell);
        } else {
            match classify(value) {
                ValueShape::Vector(items) => {
                    for (index, item) in items.iter().enumerate().take(card) {
                        cells.insert(naming.column(field, index), Some(normalize_scalar(item)));
                    }
                }
                ValueShape::Scalar(scalar) => {
                    cells.insert(naming.column(field, 0), Some(normalize_scalar(scalar)));
                }
                ValueShape::Unsupported(_) => {}
            }
        }
    }

    cells.into_values().collect()
}

/// Canonical cell text for a scalar value.
///
/// Strings have embedded `\r\n` collapsed to a single space and non-ASCII
/// characters escaped; booleans and numbers use their canonical text form.
pub fn normalize_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => escape_non_ascii(&s.replace("\r\n", " ")),
        other => other.to_string(),
    }
}

/// Escape characters outside the ASCII range as `\xNN`, `\uNNNN`, or
/// `\UNNNNNNNN` depending on the code point width. Nothing is dropped.
fn escape_non_ascii(s: &str) -> String {
    if s.is_ascii() {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let code = ch as u32;
            if code <= 0xFF {
                out.push_str(&format!("\\x{code:02x}"));
            } else if code <= 0xFFFF {
                out.push_str(&format!("\\u{code:04x}"));
            } else {
                out.push_str(&format!("\\U{code:08x}"));
            }
        }
    }
    out
}
