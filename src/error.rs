use thiserror::Error;

/// Errors raised while turning a JSON document into a CSV table.
///
/// Every variant is fatal: conversion produces no partial output, because
/// the column schema depends on a complete, fully-typed pass over all
/// records before any row can be projected.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// A path segment must be a numeric index because the value at that
    /// point in the document is an array.
    #[error("path {path} expects a numeric index at '{segment}' because the JSON contains an array")]
    PathType { path: String, segment: String },

    /// A path segment names a key or index that does not exist.
    #[error("path {path} does not resolve at '{segment}'")]
    PathLookup { path: String, segment: String },

    /// The resolved path target is not an array of records.
    #[error("path {path} is of unsupported type {found}, expected an array of records")]
    UnsupportedRoot {
        path: String,
        found: &'static str,
    },

    /// The resolved array contains an element that is not an object.
    #[error("path {path} contains a non-record element: {element}")]
    NonRecordElement { path: String, element: String },

    /// A record field holds a value that is neither a scalar nor an array
    /// of scalars.
    #[error("field '{field}' has unsupported value type {found}")]
    UnsupportedValue {
        field: String,
        found: &'static str,
    },
}
