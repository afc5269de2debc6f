//! Path resolution inside a parsed JSON document.
//!
//! A path is an ordered list of segments. Each segment indexes into the
//! current value: by key for objects, by parsed integer index for arrays.

use crate::error::FlattenError;
use serde_json::Value;

/// Render a path the way error messages report it, e.g. `results->0->items`.
pub fn join_path(path: &[String]) -> String {
    path.join("->")
}

/// Resolve `path` against `doc` segment by segment.
///
/// An empty path returns the document itself. Indexing into an array with a
/// non-numeric segment is a [`FlattenError::PathType`]; a missing key, an
/// out-of-range index, or an attempt to index into a scalar is a
/// [`FlattenError::PathLookup`].
pub fn resolve_path<'a>(doc: &'a Value, path: &[String]) -> Result<&'a Value, FlattenError> {
    let mut current = doc;

    for segment in path {
        current = match current {
            Value::Array(items) => {
                let index: usize =
                    segment
                        .parse()
                        .map_err(|_| FlattenError::PathType {
                            path: join_path(path),
                            segment: segment.clone(),
                        })?;
                items.get(index).ok_or_else(|| FlattenError::PathLookup {
                    path: join_path(path),
                    segment: segment.clone(),
                })?
            }
            Value::Object(map) => {
                map.get(segment).ok_or_else(|| FlattenError::PathLookup {
                    path: join_path(path),
                    segment: segment.clone(),
                })?
            }
            // Scalars have nothing to index into.
            _ => {
                return Err(FlattenError::PathLookup {
                    path: join_path(path),
                    segment: segment.clone(),
                })
            }
        };
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_path_returns_document() {
        let doc = json!({"results": [1, 2]});
        let resolved = resolve_path(&doc, &[]).unwrap();
        assert_eq!(*resolved, doc);
    }

    #[test]
    fn test_key_then_index() {
        let doc = json!({"results": [{"x": "hi"}]});

        let arr = resolve_path(&doc, &segments(&["results"])).unwrap();
        assert_eq!(*arr, json!([{"x": "hi"}]));

        let elem = resolve_path(&doc, &segments(&["results", "0"])).unwrap();
        assert_eq!(*elem, json!({"x": "hi"}));
    }

    #[test]
    fn test_non_numeric_segment_into_array() {
        let doc = json!({"results": [1, 2, 3]});
        let err = resolve_path(&doc, &segments(&["results", "first"])).unwrap_err();
        assert!(matches!(err, FlattenError::PathType { .. }));
        assert!(err.to_string().contains("results->first"));
    }

    #[test]
    fn test_missing_key() {
        let doc = json!({"results": []});
        let err = resolve_path(&doc, &segments(&["missing"])).unwrap_err();
        assert!(matches!(err, FlattenError::PathLookup { .. }));
    }

    #[test]
    fn test_index_out_of_range() {
        let doc = json!([1, 2]);
        let err = resolve_path(&doc, &segments(&["5"])).unwrap_err();
        assert!(matches!(err, FlattenError::PathLookup { .. }));
    }

    #[test]
    fn test_indexing_into_scalar() {
        let doc = json!({"a": 1});
        let err = resolve_path(&doc, &segments(&["a", "b"])).unwrap_err();
        assert!(matches!(err, FlattenError::PathLookup { .. }));
    }
}
