//! The Task record
//!
//! A task is never created or persisted with empty text; validation lives
//! in [`super::ops::add`], the only constructor path the UI uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Serialized field names follow the stored JSON layout
/// (`{id, text, completed, createdAt}`); `createdAt` round-trips as an
/// RFC 3339 string and deserializes back into a timestamp. List position,
/// not `created_at`, determines display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation and never reassigned
    pub id: String,

    /// Trimmed task description
    pub text: String,

    /// Whether the task has been checked off
    pub completed: bool,

    /// Creation timestamp; immutable
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, not-yet-completed task. Callers trim and validate the
    /// text first.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_task_id(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// UUIDv7 stays roughly time-ordered while keeping ids unique under rapid
/// insertion within the same clock tick.
fn generate_task_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("a");
        let b = Task::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_field_names() {
        let task = Task::new("Buy milk");
        let json = serde_json::to_value(&task).unwrap();

        assert!(json.get("id").is_some());
        assert!(json.get("text").is_some());
        assert!(json.get("completed").is_some());
        assert!(json.get("createdAt").is_some(), "createdAt must be camelCase");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_serde_round_trip_preserves_timestamp() {
        let task = Task::new("Buy milk");

        let json = serde_json::to_string(&task).unwrap();
        let deserialized: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, task);
        assert_eq!(deserialized.created_at, task.created_at);
    }

    #[test]
    fn test_deserialize_rebuilds_timestamp_from_string() {
        let json = r#"{"id":"t-1","text":"Walk","completed":true,"createdAt":"2026-08-04T09:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, "t-1");
        assert!(task.completed);
        assert_eq!(task.created_at.to_rfc3339(), "2026-08-04T09:30:00+00:00");
    }
}
