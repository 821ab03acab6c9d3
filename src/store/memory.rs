use super::types::Dataset;

use std::sync::Arc;
use tokio::sync::Mutex;

/// Owner of the current `Dataset`.
///
/// Every access goes through one mutex: replacing, reading and filtering all serialize
/// with each other. The guard is dropped on every exit path, so a failing reader never
/// leaves the store locked.
pub struct DatasetStore {
    dataset: Mutex<Dataset>,
}

impl DatasetStore {
    /// Creates an empty store, shared the way handlers receive it.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Installs `dataset` in place of the current one.
    ///
    /// The swap happens under the lock, so a reader sees either the old rows or the new
    /// rows, never a mix. The previous dataset is dropped after the lock is released.
    pub async fn replace(&self, dataset: Dataset) {
        let previous = {
            let mut current = self.dataset.lock().await;
            std::mem::replace(&mut *current, dataset)
        };

        tracing::debug!("Replaced dataset ({} records discarded)", previous.len());
    }

    /// Returns a copy of the current dataset.
    ///
    /// Inspection API for tests and tooling; request handlers read through `with_dataset`.
    pub async fn snapshot(&self) -> Dataset {
        self.dataset.lock().await.clone()
    }

    /// Runs `f` against the current dataset with the lock held for its whole duration.
    pub async fn with_dataset<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Dataset) -> R,
    {
        let current = self.dataset.lock().await;
        f(&current)
    }

    /// Inspection helper; handlers check emptiness inside `with_dataset`.
    pub async fn is_empty(&self) -> bool {
        self.dataset.lock().await.is_empty()
    }

    /// Inspection helper; takes the lock, so avoid it on request paths.
    pub async fn len(&self) -> usize {
        self.dataset.lock().await.len()
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self {
            dataset: Mutex::new(Dataset::default()),
        }
    }
}
