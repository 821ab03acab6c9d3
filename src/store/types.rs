//! Dataset Data Types
//!
//! `Record` and `Dataset` are plain values: they are built by the ingest pipeline,
//! handed to the store in one piece and only ever read afterwards.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

/// Where each header column lands in a record, worked out once per upload.
///
/// A repeated column name keeps its first position and takes the last value,
/// the same outcome as inserting the pairs into a map one by one.
#[derive(Debug, Clone)]
pub struct RecordLayout {
    columns: Vec<Arc<str>>,
    slots: Vec<usize>,
}

impl RecordLayout {
    pub fn new(header: &[Arc<str>]) -> Self {
        let mut columns: Vec<Arc<str>> = Vec::with_capacity(header.len());
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(header.len());

        let slots = header
            .iter()
            .map(|column| {
                *positions.entry(&**column).or_insert_with(|| {
                    columns.push(column.clone());
                    columns.len() - 1
                })
            })
            .collect();

        Self { columns, slots }
    }

    /// Builds a record by pairing header columns with row cells positionally.
    ///
    /// Cells beyond the header are ignored; the CSV reader guarantees equal lengths.
    pub fn record<I, S>(&self, cells: I) -> Record
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: Vec<(Arc<str>, String)> = self
            .columns
            .iter()
            .map(|column| (column.clone(), String::new()))
            .collect();

        for (slot, cell) in self.slots.iter().zip(cells) {
            fields[*slot].1 = cell.into();
        }

        Record { fields }
    }

    /// Distinct column names, in first-seen order.
    pub fn columns(&self) -> &[Arc<str>] {
        &self.columns
    }
}

/// One CSV data row as an ordered column -> value mapping.
///
/// Column names are shared between all records of a dataset (`Arc<str>`), so a large
/// upload only stores each header cell once. Fields keep header order, which is also
/// the key order of the JSON object produced on serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(Arc<str>, String)>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| &**key == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names of this record. Mostly useful for inspection and tests.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| &**key)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(&**key, value)?;
        }
        map.end()
    }
}

/// The ordered rows of one upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    header: Vec<Arc<str>>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(header: Vec<Arc<str>>, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Column names in upload order (duplicates included, as they appeared in the file).
    /// Not used when serving requests; kept for inspection.
    pub fn header(&self) -> &[Arc<str>] {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
