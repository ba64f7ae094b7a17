use crate::types::{RawRow, Record};

/// Turns a loaded row into a [`Record`].
///
/// Every field is trimmed. Line breaks inside the description are removed
/// outright. Blank URLs and descriptions become `None`.
pub fn normalize_row(row: RawRow) -> Record {
    let description: String = row
        .description
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect();

    Record {
        kind: row.kind.trim().to_string(),
        subtype: row.subtype.trim().to_string(),
        name: row.name.trim().to_string(),
        url: non_empty(row.url.trim()),
        description: non_empty(description.trim()),
    }
}

pub fn normalize_rows(rows: Vec<RawRow>) -> Vec<Record> {
    rows.into_iter().map(normalize_row).collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
