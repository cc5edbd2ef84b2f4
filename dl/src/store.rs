//! Task persistence adapter
//!
//! Wraps a [`KeyStore`] with the task sequence's load/save contract: reads
//! go straight to storage, writes are enqueued on a single-writer queue
//! and never block the caller. Both directions fail soft: a failed load
//! starts the session empty, a failed save is logged and dropped.

use std::path::Path;

use keystore::{KeyStore, WriterHandle, writer};
use tracing::{debug, warn};

use crate::domain::Task;

/// Storage key holding the serialized task sequence
pub const TASKS_KEY: &str = "dailyTasks";

/// Persistence adapter for the task sequence.
#[derive(Debug, Clone)]
pub struct TaskStore {
    store: KeyStore,
    writer: WriterHandle,
}

impl TaskStore {
    /// Open the store rooted at `data_dir` and spawn its snapshot writer.
    pub fn spawn(data_dir: impl AsRef<Path>) -> Self {
        let store = KeyStore::open(data_dir);
        let writer = writer::spawn(store.clone(), TASKS_KEY);
        Self { store, writer }
    }

    /// Load the persisted task sequence.
    ///
    /// Invoked once at startup. An absent key and any read or parse
    /// failure all produce an empty sequence; failures are logged, never
    /// surfaced.
    pub async fn load(&self) -> Vec<Task> {
        match self.store.get(TASKS_KEY).await {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Task>>(&payload) {
                Ok(tasks) => {
                    debug!(count = tasks.len(), "Loaded saved tasks");
                    tasks
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse saved tasks, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No saved tasks");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load tasks, starting empty");
                Vec::new()
            }
        }
    }

    /// Enqueue a save of the full sequence.
    ///
    /// Fire-and-forget: the caller never waits on or learns about the
    /// write. A serialization failure drops the snapshot after a log line.
    pub fn save(&self, tasks: &[Task]) {
        match serde_json::to_string(tasks) {
            Ok(payload) => self.writer.submit(payload),
            Err(e) => warn!(error = %e, "Failed to serialize tasks"),
        }
    }

    /// Wait for queued writes to reach storage. Used at shutdown and in
    /// tests; the UI never calls this.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_from_empty_dir() {
        let temp = TempDir::new().unwrap();
        let store = TaskStore::spawn(temp.path());

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = TaskStore::spawn(temp.path());

        let tasks = vec![Task::new("Buy milk"), Task::new("Walk the dog")];
        store.save(&tasks);
        store.flush().await;

        let loaded = store.load().await;
        assert_eq!(loaded, tasks);
    }

    #[tokio::test]
    async fn test_corrupt_payload_loads_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("dailyTasks.json"), "not json at all").unwrap();

        let store = TaskStore::spawn(temp.path());
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_last_save_wins() {
        let temp = TempDir::new().unwrap();
        let store = TaskStore::spawn(temp.path());

        let first = vec![Task::new("a")];
        let second = vec![Task::new("b"), Task::new("c")];
        store.save(&first);
        store.save(&second);
        store.flush().await;

        assert_eq!(store.load().await, second);
    }
}
