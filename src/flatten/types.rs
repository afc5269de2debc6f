use serde::{Deserialize, Serialize};

/// Naming template for the columns of a multi-cardinality field.
///
/// The template contains two placeholders: `{fieldName}` for the field name
/// and `{index}` for the zero-based position within the field's array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnNaming {
    template: String,
}

impl ColumnNaming {
    pub const DEFAULT_TEMPLATE: &'static str = "{fieldName}_{index}";

    pub fn new(template: impl Into<String>) -> Self {
        ColumnNaming {
            template: template.into(),
        }
    }

    /// The column name for position `index` of `field`.
    pub fn column(&self, field: &str, index: usize) -> String {
        self.template
            .replace("{fieldName}", field)
            .replace("{index}", &index.to_string())
    }
}

impl Default for ColumnNaming {
    fn default() -> Self {
        ColumnNaming::new(Self::DEFAULT_TEMPLATE)
    }
}

/// Configuration for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct FlattenConfig {
    /// Path segments locating the record array inside the document.
    /// Empty means the document root is itself the array.
    pub path: Vec<String>,

    /// Column naming for fields that expand into multiple columns.
    pub naming: ColumnNaming,
}

/// A rectangular table ready for CSV serialization.
///
/// `columns` is in final output order (lexicographically sorted) and every
/// row has exactly one cell per column; `None` cells serialize as empty
/// CSV fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_naming() {
        let naming = ColumnNaming::default();
        assert_eq!(naming.column("tags", 0), "tags_0");
        assert_eq!(naming.column("tags", 11), "tags_11");
    }

    #[test]
    fn test_custom_naming() {
        let naming = ColumnNaming::new("{fieldName}[{index}]");
        assert_eq!(naming.column("tags", 2), "tags[2]");
    }
}
