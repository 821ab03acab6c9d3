use crate::store::types::Record;

/// Returns the records with at least one value containing `query`, ignoring case.
///
/// Both sides are lower-cased with Unicode rules before a plain substring test, so the
/// result does not depend on the host locale. Order follows `records`.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| matches_lowercase(record, &needle))
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_lowercase(record: &Record, needle: &str) -> bool {
    record
        .values()
        .any(|value| value.to_lowercase().contains(needle))
}
