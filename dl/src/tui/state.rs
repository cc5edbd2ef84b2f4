//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.

use crate::domain::{self, Task, TaskStats};

/// Startup load progress. Flips to `Ready` exactly once per session, when
/// the initial load completes (or fails and defaults to empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

/// Which screen the renderer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Initial load still in flight; nothing interactable but quit
    Loading,
    /// Load finished, no tasks
    Empty,
    /// Load finished, at least one task
    Populated,
}

/// Interaction mode (modal)
#[derive(Debug, Clone, Default)]
pub enum InteractionMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Task input mode (n key)
    TaskInput(String),
    /// Confirmation dialog
    Confirm(ConfirmDialog),
    /// Help overlay
    Help,
}

impl InteractionMode {
    /// Get the input buffer if in task input mode
    pub fn input_buffer(&self) -> Option<&str> {
        match self {
            Self::TaskInput(s) => Some(s),
            _ => None,
        }
    }

    /// Get mutable input buffer
    pub fn input_buffer_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::TaskInput(s) => Some(s),
            _ => None,
        }
    }
}

/// Confirmation dialog for destructive actions
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub message: String,
    pub action: ConfirmAction,
    pub selected_button: bool, // false = No, true = Yes
}

impl ConfirmDialog {
    pub fn new(action: ConfirmAction, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action,
            selected_button: false,
        }
    }

    pub fn delete_task(id: String) -> Self {
        Self::new(
            ConfirmAction::DeleteTask(id),
            "Are you sure you want to delete this task?",
        )
    }

    pub fn clear_completed() -> Self {
        Self::new(
            ConfirmAction::ClearCompleted,
            "Are you sure you want to clear all completed tasks?",
        )
    }
}

/// Action to perform on confirm
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteTask(String),
    ClearCompleted,
}

/// Validation message for an empty task submission
pub const EMPTY_TASK_MESSAGE: &str = "Please enter a task";

/// User intent queued for the runner to apply to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    Add(String),
    Toggle(String),
    Delete(String),
    ClearCompleted,
}

impl From<ConfirmAction> for TaskIntent {
    fn from(action: ConfirmAction) -> Self {
        match action {
            ConfirmAction::DeleteTask(id) => Self::Delete(id),
            ConfirmAction::ClearCompleted => Self::ClearCompleted,
        }
    }
}

/// Selection state for the task list
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    pub selected_index: usize,
}

impl SelectionState {
    pub fn select_next(&mut self, max_items: usize) {
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self, max_items: usize) {
        if max_items > 0 {
            self.selected_index = max_items - 1;
        }
    }

    /// Ensure selection is within bounds
    pub fn clamp(&mut self, max_items: usize) {
        if max_items == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= max_items {
            self.selected_index = max_items - 1;
        }
    }
}

/// Main TUI application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Startup load progress
    pub load_phase: LoadPhase,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// Snapshot of the task sequence for display
    pub tasks: Vec<Task>,
    /// Derived counters, refreshed with the snapshot
    pub stats: TaskStats,
    /// Task list selection
    pub selection: SelectionState,
    /// Last validation/transient error message
    pub error_message: Option<String>,
    /// Intent queued for the runner to apply
    pub pending_intent: Option<TaskIntent>,
    /// Should the app quit
    pub should_quit: bool,
}

impl AppState {
    /// Create new AppState
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the current view from load phase and task count.
    ///
    /// `Loading -> Empty | Populated` happens once, on load completion;
    /// `Empty <-> Populated` tracks the sequence length after that.
    pub fn view(&self) -> View {
        match self.load_phase {
            LoadPhase::Loading => View::Loading,
            LoadPhase::Ready if self.tasks.is_empty() => View::Empty,
            LoadPhase::Ready => View::Populated,
        }
    }

    /// Replace the displayed snapshot and recompute stats and selection
    /// bounds. Called by the runner after every controller mutation.
    pub fn sync_tasks(&mut self, tasks: Vec<Task>) {
        self.stats = domain::stats(&tasks);
        self.tasks = tasks;
        self.selection.clamp(self.tasks.len());
    }

    /// Id of the currently selected task
    pub fn selected_task_id(&self) -> Option<String> {
        self.tasks
            .get(self.selection.selected_index)
            .map(|t| t.id.clone())
    }

    /// Set a transient error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear the error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_is_loading_until_ready() {
        let state = AppState::new();
        assert_eq!(state.view(), View::Loading);
    }

    #[test]
    fn test_view_empty_vs_populated() {
        let mut state = AppState::new();
        state.load_phase = LoadPhase::Ready;
        assert_eq!(state.view(), View::Empty);

        state.sync_tasks(vec![Task::new("a")]);
        assert_eq!(state.view(), View::Populated);

        state.sync_tasks(Vec::new());
        assert_eq!(state.view(), View::Empty);
    }

    #[test]
    fn test_sync_tasks_refreshes_stats() {
        let mut state = AppState::new();
        let mut task = Task::new("a");
        task.completed = true;
        state.sync_tasks(vec![task, Task::new("b")]);

        assert_eq!(state.stats.total, 2);
        assert_eq!(state.stats.completed, 1);
        assert_eq!(state.stats.progress_percent, 50);
    }

    #[test]
    fn test_sync_tasks_clamps_selection() {
        let mut state = AppState::new();
        state.sync_tasks(vec![Task::new("a"), Task::new("b"), Task::new("c")]);
        state.selection.select_last(3);
        assert_eq!(state.selection.selected_index, 2);

        // Sequence shrank under the selection
        state.sync_tasks(vec![Task::new("a")]);
        assert_eq!(state.selection.selected_index, 0);
    }

    #[test]
    fn test_selection_state_navigation() {
        let mut selection = SelectionState::default();

        selection.select_next(10);
        assert_eq!(selection.selected_index, 1);

        selection.select_prev();
        assert_eq!(selection.selected_index, 0);

        // Can't go below 0
        selection.select_prev();
        assert_eq!(selection.selected_index, 0);

        selection.select_last(10);
        assert_eq!(selection.selected_index, 9);

        // Can't go past end
        selection.select_next(10);
        assert_eq!(selection.selected_index, 9);
    }

    #[test]
    fn test_selected_task_id_follows_selection() {
        let mut state = AppState::new();
        let tasks = vec![Task::new("a"), Task::new("b")];
        let second = tasks[1].id.clone();
        state.sync_tasks(tasks);

        state.selection.select_next(2);
        assert_eq!(state.selected_task_id(), Some(second));
    }

    #[test]
    fn test_confirm_dialog_defaults_to_no() {
        let dialog = ConfirmDialog::delete_task("t-1".to_string());
        assert!(!dialog.selected_button);
        assert!(matches!(dialog.action, ConfirmAction::DeleteTask(ref id) if id == "t-1"));
    }
}
