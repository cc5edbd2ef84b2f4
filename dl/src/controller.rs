//! Task sequence controller
//!
//! Sole owner and sole mutator of the in-memory task sequence. Every
//! mutation goes through the pure operations in [`crate::domain`]; after a
//! mutation that actually changed the sequence, the full snapshot is handed
//! to the store. The renderer only ever sees the sequence by reference.

use tracing::debug;

use crate::domain::{self, AddError, Task, TaskStats};
use crate::store::TaskStore;

/// Owner of the current task sequence.
#[derive(Debug)]
pub struct TaskController {
    tasks: Vec<Task>,
    store: TaskStore,
}

impl TaskController {
    /// Create a controller with an empty sequence. The persisted snapshot
    /// is installed later via [`restore`](Self::restore) once the initial
    /// load completes.
    pub fn new(store: TaskStore) -> Self {
        Self {
            tasks: Vec::new(),
            store,
        }
    }

    /// Install the sequence loaded at startup. Does not write back to
    /// storage; the snapshot came from there.
    pub fn restore(&mut self, tasks: Vec<Task>) {
        debug!(count = tasks.len(), "Restored task sequence");
        self.tasks = tasks;
    }

    /// The current sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Derived counters for the current sequence.
    pub fn stats(&self) -> TaskStats {
        domain::stats(&self.tasks)
    }

    /// The store this controller persists through.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Append a new task. Empty or whitespace-only text is rejected
    /// without touching the sequence.
    pub fn add(&mut self, raw_text: &str) -> Result<(), AddError> {
        let next = domain::add(&self.tasks, raw_text)?;
        self.commit(next);
        Ok(())
    }

    /// Flip completion on the task matching `id`. Unknown ids change
    /// nothing and trigger no save.
    pub fn toggle(&mut self, id: &str) {
        let next = domain::toggle(&self.tasks, id);
        self.commit(next);
    }

    /// Remove the task matching `id`. The UI confirms before calling this.
    pub fn delete(&mut self, id: &str) {
        let next = domain::delete(&self.tasks, id);
        self.commit(next);
    }

    /// Drop every completed task. The UI confirms before calling this.
    pub fn clear_completed(&mut self) {
        let next = domain::clear_completed(&self.tasks);
        self.commit(next);
    }

    /// Adopt `next` as the current sequence and enqueue a save, but only
    /// when it differs from the current one; no-op operations must not
    /// produce writes.
    fn commit(&mut self, next: Vec<Task>) {
        if next != self.tasks {
            self.tasks = next;
            self.store.save(&self.tasks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn controller(temp: &TempDir) -> TaskController {
        TaskController::new(TaskStore::spawn(temp.path()))
    }

    #[tokio::test]
    async fn test_add_appends_and_persists() {
        let temp = TempDir::new().unwrap();
        let mut ctrl = controller(&temp);

        ctrl.add("Buy milk").unwrap();
        assert_eq!(ctrl.tasks().len(), 1);
        assert_eq!(ctrl.tasks()[0].text, "Buy milk");

        ctrl.store().flush().await;
        let reloaded = ctrl.store().load().await;
        assert_eq!(reloaded, ctrl.tasks());
    }

    #[tokio::test]
    async fn test_add_empty_text_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut ctrl = controller(&temp);

        assert_eq!(ctrl.add("   "), Err(AddError::EmptyText));
        assert!(ctrl.tasks().is_empty());

        // Nothing was written
        ctrl.store().flush().await;
        assert!(ctrl.store().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_updates_stats() {
        let temp = TempDir::new().unwrap();
        let mut ctrl = controller(&temp);

        ctrl.add("Buy milk").unwrap();
        let id = ctrl.tasks()[0].id.clone();
        ctrl.toggle(&id);

        assert!(ctrl.tasks()[0].completed);
        let stats = ctrl.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.progress_percent, 100);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_does_not_save() {
        let temp = TempDir::new().unwrap();
        let mut ctrl = controller(&temp);

        ctrl.toggle("absent");
        ctrl.store().flush().await;

        // No mutation happened, so no snapshot file exists
        assert!(!temp.path().join("dailyTasks.json").exists());
    }

    #[tokio::test]
    async fn test_delete_removes_matching_task() {
        let temp = TempDir::new().unwrap();
        let mut ctrl = controller(&temp);

        ctrl.add("a").unwrap();
        ctrl.add("b").unwrap();
        let id = ctrl.tasks()[0].id.clone();

        ctrl.delete(&id);

        assert_eq!(ctrl.tasks().len(), 1);
        assert_eq!(ctrl.tasks()[0].text, "b");
    }

    #[tokio::test]
    async fn test_clear_completed_empties_fully_done_list() {
        let temp = TempDir::new().unwrap();
        let mut ctrl = controller(&temp);

        ctrl.add("a").unwrap();
        ctrl.add("b").unwrap();
        let ids: Vec<String> = ctrl.tasks().iter().map(|t| t.id.clone()).collect();
        for id in &ids {
            ctrl.toggle(id);
        }

        ctrl.clear_completed();
        assert!(ctrl.tasks().is_empty());

        ctrl.store().flush().await;
        assert!(ctrl.store().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_restore_does_not_write_back() {
        let temp = TempDir::new().unwrap();
        let mut ctrl = controller(&temp);

        ctrl.restore(vec![Task::new("loaded")]);
        ctrl.store().flush().await;

        assert!(!temp.path().join("dailyTasks.json").exists());
        assert_eq!(ctrl.tasks().len(), 1);
    }
}
