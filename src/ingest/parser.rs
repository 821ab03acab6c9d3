use super::types::IngestError;
use crate::store::types::{Dataset, RecordLayout};

use std::sync::Arc;

/// Parses a complete CSV file into a `Dataset`.
///
/// The first record is the header. The reader is not flexible: a row whose field count
/// differs from the header's is an error, as is invalid UTF-8 or broken quoting. Nothing
/// is returned until the whole input has parsed.
///
/// Runs in time linear in the input size; duplicate columns are resolved once per header.
pub fn parse_dataset(input: &[u8]) -> Result<Dataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input);
    let mut rows = reader.records();

    let header: Vec<Arc<str>> = match rows.next() {
        Some(row) => row?.iter().map(Arc::from).collect(),
        None => return Err(IngestError::EmptyFile),
    };

    let layout = RecordLayout::new(&header);
    let records = rows
        .map(|row| row.map(|row| layout.record(row.iter())))
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(IngestError::NoRecords);
    }

    Ok(Dataset::new(header, records))
}
