//! Store Module Tests
//!
//! Validates the record model and the locking store.
//!
//! ## Test Scopes
//! - **Record**: Positional zipping, key order, duplicate columns and JSON shape.
//! - **DatasetStore**: Empty start, wholesale replacement and consistent reads under concurrency.

#[cfg(test)]
mod tests {
    use crate::store::memory::DatasetStore;
    use crate::store::types::{Dataset, RecordLayout};
    use std::sync::Arc;

    fn header(columns: &[&str]) -> Vec<Arc<str>> {
        columns.iter().map(|c| Arc::from(*c)).collect()
    }

    fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
        let header = header(columns);
        let layout = RecordLayout::new(&header);
        let records = rows
            .iter()
            .map(|row| layout.record(row.iter().copied()))
            .collect();
        Dataset::new(header, records)
    }

    // ============================================================
    // RECORD TESTS
    // ============================================================

    #[test]
    fn test_record_zips_header_with_cells() {
        let header = header(&["name", "age"]);
        let record = RecordLayout::new(&header).record(["Ana", "30"]);

        assert_eq!(record.get("name"), Some("Ana"));
        assert_eq!(record.get("age"), Some("30"));
        assert_eq!(record.get("email"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_record_keeps_header_order() {
        let header = header(&["zeta", "alpha", "mid"]);
        let record = RecordLayout::new(&header).record(["1", "2", "3"]);

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

        let values: Vec<&str> = record.values().collect();
        assert_eq!(values, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_record_duplicate_column_keeps_last_value() {
        let header = header(&["id", "name", "id"]);
        let record = RecordLayout::new(&header).record(["1", "Ana", "2"]);

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["id", "name"]);
        assert_eq!(record.get("id"), Some("2"));
    }

    #[test]
    fn test_layout_resolves_duplicates_once_per_header() {
        let header = header(&["a", "b", "a", "c", "b"]);
        let layout = RecordLayout::new(&header);

        let columns: Vec<&str> = layout.columns().iter().map(|c| &**c).collect();
        assert_eq!(columns, vec!["a", "b", "c"]);

        let first = layout.record(["1", "2", "3", "4", "5"]);
        let second = layout.record(["6", "7", "8", "9", "10"]);
        assert_eq!(first.values().collect::<Vec<_>>(), vec!["3", "5", "4"]);
        assert_eq!(second.values().collect::<Vec<_>>(), vec!["8", "10", "9"]);
    }

    #[test]
    fn test_record_serializes_as_ordered_object() {
        let header = header(&["name", "age"]);
        let record = RecordLayout::new(&header).record(["Ana", "30"]);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Ana","age":"30"}"#);
    }

    // ============================================================
    // DATASET STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_store_starts_empty() {
        let store = DatasetStore::new();

        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
        assert!(store.snapshot().await.records().is_empty());
    }

    #[tokio::test]
    async fn test_store_replace_installs_dataset() {
        let store = DatasetStore::new();
        store
            .replace(dataset(&["name", "age"], &[&["Ana", "30"], &["Luis", "25"]]))
            .await;

        assert!(!store.is_empty().await);
        assert_eq!(store.len().await, 2);

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.records()[0].get("name"), Some("Ana"));
        assert_eq!(snapshot.records()[1].get("name"), Some("Luis"));
    }

    #[tokio::test]
    async fn test_store_replace_discards_previous_rows() {
        let store = DatasetStore::new();
        store
            .replace(dataset(&["name"], &[&["Ana"], &["Luis"], &["Marta"]]))
            .await;
        store.replace(dataset(&["city"], &[&["Lima"]])).await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.records()[0].get("city"), Some("Lima"));
        assert_eq!(snapshot.records()[0].get("name"), None);
        assert_eq!(snapshot.header().len(), 1);
    }

    #[tokio::test]
    async fn test_store_with_dataset_reads_current_rows() {
        let store = DatasetStore::new();
        store.replace(dataset(&["n"], &[&["a"], &["b"]])).await;

        let names: Vec<String> = store
            .with_dataset(|ds| {
                ds.records()
                    .iter()
                    .filter_map(|r| r.get("n").map(str::to_string))
                    .collect()
            })
            .await;

        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_store_lock_released_after_reader_error() {
        let store = DatasetStore::new();
        store.replace(dataset(&["n"], &[&["a"]])).await;

        let failed: Result<(), &str> = store.with_dataset(|_| Err("encode failed")).await;
        assert!(failed.is_err());

        // A subsequent writer must not block
        let replaced = tokio::time::timeout(
            std::time::Duration::from_secs(1),
            store.replace(dataset(&["n"], &[&["b"]])),
        )
        .await;
        assert!(replaced.is_ok(), "Lock should be free after a failed read");
    }

    #[tokio::test]
    async fn test_store_readers_never_observe_mixed_datasets() {
        let store = DatasetStore::new();
        let old_rows: Vec<[&str; 1]> = (0..50).map(|_| ["old"]).collect();
        let old_refs: Vec<&[&str]> = old_rows.iter().map(|r| &r[..]).collect();
        store.replace(dataset(&["tag"], &old_refs)).await;

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..20 {
                    let rows: Vec<[&str; 1]> = (0..50).map(|_| ["new"]).collect();
                    let refs: Vec<&[&str]> = rows.iter().map(|r| &r[..]).collect();
                    store.replace(dataset(&["tag"], &refs)).await;
                    let rows: Vec<[&str; 1]> = (0..50).map(|_| ["old"]).collect();
                    let refs: Vec<&[&str]> = rows.iter().map(|r| &r[..]).collect();
                    store.replace(dataset(&["tag"], &refs)).await;
                }
            })
        };

        let mut readers = Vec::new();
        for _ in 0..4 {
            let store = store.clone();
            readers.push(tokio::spawn(async move {
                for _ in 0..50 {
                    let snapshot = store.snapshot().await;
                    let first = snapshot.records()[0].get("tag").map(str::to_string);
                    assert!(
                        snapshot
                            .records()
                            .iter()
                            .all(|r| r.get("tag").map(str::to_string) == first),
                        "Snapshot mixed rows from two uploads"
                    );
                    assert_eq!(snapshot.len(), 50);
                    tokio::task::yield_now().await;
                }
            }));
        }

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }
    }
}
