use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque task identifier. Generated once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub(crate) fn new(text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            text,
            created_at,
        }
    }
}

/// Trim user input; `None` when nothing but whitespace remains.
pub fn normalize_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_text("  Buy milk \n").as_deref(), Some("Buy milk"));
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
        assert_eq!(normalize_text("\t\n"), None);
    }

    #[test]
    fn test_task_id_round_trips_through_display() {
        let id = TaskId::new();
        let parsed: TaskId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_task_id_rejects_garbage() {
        assert!("not-a-task".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new("Test task".to_string(), Utc::now());
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("Test task"));
        assert!(json.contains(&format!("\"id\":\"{}\"", task.id)));
    }
}
