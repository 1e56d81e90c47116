//! Header matching and row projection. Pure data transforms, no I/O; the
//! pipeline layer owns all diagnostics around them.

use crate::domain::model::{FieldSpec, Record, TableData};
use std::collections::HashMap;

/// Lower-cases `s` and strips every Unicode whitespace character, so header
/// comparisons ignore case, spacing and non-breaking space variants.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Binds each field spec to the index of the first header whose normalized
/// text contains the normalized search pattern. First match wins; fields
/// without a match are omitted. Two specs may bind the same index.
pub fn match_columns(headers: &[String], specs: &[FieldSpec]) -> HashMap<String, usize> {
    let mut columns = HashMap::new();

    for spec in specs {
        let pattern = normalize(&spec.pattern);
        for (i, header) in headers.iter().enumerate() {
            if normalize(header).contains(&pattern) {
                columns.insert(spec.name.clone(), i);
                break;
            }
        }
    }

    columns
}

/// Projects a table's data rows onto the matched columns. The first row is
/// always treated as the header row and skipped; rows with zero data cells
/// are separators, not data. A record is kept only if at least one field
/// bound within the row's bounds.
pub fn project_rows(table: &TableData, columns: &HashMap<String, usize>) -> Vec<Record> {
    let mut records = Vec::new();

    for row in table.rows.iter().skip(1) {
        if row.is_empty() {
            continue;
        }

        let mut record = Record::default();
        for (name, &index) in columns {
            if let Some(cell) = row.get(index) {
                record.values.insert(name.clone(), cell.trim().to_string());
            }
        }

        if !record.values.is_empty() {
            records.push(record);
        }
    }

    records
}
