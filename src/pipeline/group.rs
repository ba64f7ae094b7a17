use crate::types::Record;
use std::collections::BTreeMap;

/// Records keyed by raw type label, each group in sort order.
pub type TypeGroups = BTreeMap<String, Vec<Record>>;

/// Sorts by (type, sub-type, name) using plain byte-wise string comparison.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Sorts, then groups by type. Group contents keep the global order.
pub fn group_by_type(mut records: Vec<Record>) -> TypeGroups {
    sort_records(&mut records);

    let mut groups = TypeGroups::new();
    for record in records {
        groups.entry(record.kind.clone()).or_default().push(record);
    }
    groups
}
