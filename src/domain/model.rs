use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pairing of an output field name with the substring used to locate its
/// source column. Declaration order decides the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub pattern: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// One parsed HTML table: trimmed header labels plus the `<td>` texts of
/// every `<tr>`, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One extracted row. Fields without a matched column are absent, never
/// present with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub values: HashMap<String, String>,
}

/// All records across all tables, in table-then-row order, plus the resolved
/// output column order.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<Record>,
    pub columns: Vec<String>,
}
