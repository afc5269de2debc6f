//! Value shape classification.
//!
//! Both schema inference and record projection need to know whether a field
//! value is a scalar, a flat array of scalars, or something this tool does
//! not handle. Classification happens once, here, so the two stages can
//! never disagree.

use serde_json::Value;

/// The shape of a record field value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueShape<'a> {
    /// A string, boolean, or number.
    Scalar(&'a Value),
    /// An array whose every element is a scalar. Empty arrays count.
    Vector(&'a [Value]),
    /// Anything else: null, an object, or an array containing a non-scalar.
    /// Carries the JSON type name of the offending value.
    Unsupported(&'static str),
}

/// Classify a field value into its [`ValueShape`].
pub fn classify(value: &Value) -> ValueShape<'_> {
    match value {
        Value::String(_) | Value::Bool(_) | Value::Number(_) => ValueShape::Scalar(value),
        Value::Array(items) => {
            for item in items {
                if !is_scalar(item) {
                    return ValueShape::Unsupported(json_type_name(item));
                }
            }
            ValueShape::Vector(items)
        }
        other => ValueShape::Unsupported(json_type_name(other)),
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Bool(_) | Value::Number(_))
}

/// The JSON type name of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert!(matches!(classify(&json!("hi")), ValueShape::Scalar(_)));
        assert!(matches!(classify(&json!(true)), ValueShape::Scalar(_)));
        assert!(matches!(classify(&json!(42)), ValueShape::Scalar(_)));
        assert!(matches!(classify(&json!(1.5)), ValueShape::Scalar(_)));
    }

    #[test]
    fn test_scalar_vector() {
        let value = json!([1, "two", true]);
        match classify(&value) {
            ValueShape::Vector(items) => assert_eq!(items.len(), 3),
            other => panic!("expected vector, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_array_is_vector() {
        let value = json!([]);
        assert!(matches!(classify(&value), ValueShape::Vector(items) if items.is_empty()));
    }

    #[test]
    fn test_null_is_unsupported() {
        assert_eq!(classify(&json!(null)), ValueShape::Unsupported("null"));
    }

    #[test]
    fn test_object_is_unsupported() {
        assert_eq!(
            classify(&json!({"nested": 1})),
            ValueShape::Unsupported("object")
        );
    }

    #[test]
    fn test_array_of_arrays_is_unsupported() {
        assert_eq!(
            classify(&json!([[1], [2]])),
            ValueShape::Unsupported("array")
        );
    }

    #[test]
    fn test_array_with_object_is_unsupported() {
        assert_eq!(
            classify(&json!([1, {"a": 2}])),
            ValueShape::Unsupported("object")
        );
    }

    #[test]
    fn test_array_with_null_is_unsupported() {
        assert_eq!(classify(&json!([1, null])), ValueShape::Unsupported("null"));
    }
}
