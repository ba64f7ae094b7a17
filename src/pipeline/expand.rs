use crate::types::Record;

pub const SUBTYPE_SEPARATOR: char = ',';

/// Individual labels of a sub-type field, trimmed, with empty fragments skipped.
pub fn split_subtypes(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(SUBTYPE_SEPARATOR)
        .map(str::trim)
        .filter(|label| !label.is_empty())
}

/// Fans each record out into one record per listed sub-type.
///
/// A record that already has a single sub-type is passed through as is, so the
/// output is never shorter than the input.
pub fn expand_subtypes(records: Vec<Record>) -> Vec<Record> {
    let mut expanded = Vec::with_capacity(records.len());

    for record in records {
        let labels: Vec<String> = split_subtypes(&record.subtype).map(str::to_string).collect();

        let unchanged = labels.is_empty() || (labels.len() == 1 && labels[0] == record.subtype);
        if unchanged {
            expanded.push(record);
            continue;
        }

        for label in labels {
            expanded.push(Record {
                subtype: label,
                ..record.clone()
            });
        }
    }

    expanded
}
