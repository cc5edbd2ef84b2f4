//! Pure task sequence operations
//!
//! Every operation computes a next sequence from the current one plus a
//! user intent. Unknown ids are value-preserving no-ops, not errors; the
//! only failure is adding empty text.

use thiserror::Error;

use super::task::Task;

/// Validation failure when adding a task
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddError {
    /// The submitted text was empty or whitespace-only
    #[error("task text must not be empty")]
    EmptyText,
}

/// Append a task with the trimmed text. The input sequence is untouched;
/// the result is one longer with all prior tasks unchanged.
pub fn add(tasks: &[Task], raw_text: &str) -> Result<Vec<Task>, AddError> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(AddError::EmptyText);
    }

    let mut next = tasks.to_vec();
    next.push(Task::new(text));
    Ok(next)
}

/// Flip `completed` on the task matching `id`.
pub fn toggle(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks
        .iter()
        .cloned()
        .map(|mut task| {
            if task.id == id {
                task.completed = !task.completed;
            }
            task
        })
        .collect()
}

/// Remove the task matching `id`, preserving the relative order of the rest.
pub fn delete(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

/// Retain only tasks that are not completed, in original relative order.
pub fn clear_completed(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|task| !task.completed).cloned().collect()
}

/// Derived view counters, recomputed on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// `round(completed / total * 100)`, or 0 for an empty sequence
    pub progress_percent: u8,
}

/// Compute the stats for a sequence.
pub fn stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let progress_percent = if total > 0 {
        (completed as f64 / total as f64 * 100.0).round() as u8
    } else {
        0
    };

    TaskStats {
        total,
        completed,
        progress_percent,
    }
}
