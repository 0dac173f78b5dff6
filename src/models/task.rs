//! Task model and related types

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    #[default]
    Pending,
    Completed,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskState::Pending => write!(f, "pending"),
            TaskState::Completed => write!(f, "completed"),
        }
    }
}

/// Largest id a task may carry (2^53 - 1, the largest integer a JSON number
/// holds exactly in most readers)
pub const MAX_ID: u64 = (1 << 53) - 1;

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task.
    ///
    /// `created_at` is truncated to millisecond precision so the task survives
    /// a round-trip through the persisted form unchanged.
    pub fn new(
        id: u64,
        text: impl Into<String>,
        due_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
            due_date,
            created_at: created_at.trunc_subsecs(3),
        }
    }

    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Completed
        } else {
            TaskState::Pending
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Flip the completion flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 15, 0).unwrap()
    }

    #[test]
    fn test_task_state_display() {
        assert_eq!(TaskState::Pending.to_string(), "pending");
        assert_eq!(TaskState::Completed.to_string(), "completed");
    }

    #[test]
    fn test_task_new() {
        let task = Task::new(1, "Buy milk", None, created());
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert!(task.due_date.is_none());
        assert_eq!(task.state(), TaskState::Pending);
    }

    #[test]
    fn test_task_new_truncates_to_millis() {
        let precise = created() + chrono::Duration::nanoseconds(123_456_789);
        let task = Task::new(1, "Precise", None, precise);
        assert_eq!(task.created_at.timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn test_task_toggle() {
        let mut task = Task::new(1, "Test", None, created());
        assert!(task.toggle());
        assert_eq!(task.state(), TaskState::Completed);
        assert!(!task.is_pending());

        assert!(!task.toggle());
        assert_eq!(task.state(), TaskState::Pending);
    }

    #[test]
    fn test_serialize_field_names() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let task = Task::new(1710062100000, "Write report", Some(due), created());
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["id"], 1710062100000u64);
        assert_eq!(value["text"], "Write report");
        assert_eq!(value["completed"], false);
        assert_eq!(value["dueDate"], "2024-03-15");
        assert_eq!(value["createdAt"], "2024-03-10T09:15:00.000Z");
    }

    #[test]
    fn test_serialize_missing_due_date_as_null() {
        let task = Task::new(1, "No date", None, created());
        let value = serde_json::to_value(&task).unwrap();
        assert!(value["dueDate"].is_null());
    }

    #[test]
    fn test_deserialize_offset_timestamp() {
        let raw = r#"{"id":7,"text":"x","completed":true,"dueDate":null,"createdAt":"2024-03-10T10:15:00+01:00"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.created_at, created());
        assert!(task.completed);
    }

    #[test]
    fn test_deserialize_rejects_missing_text() {
        let raw = r#"{"id":7,"completed":false,"dueDate":null,"createdAt":"2024-03-10T09:15:00.000Z"}"#;
        assert!(serde_json::from_str::<Task>(raw).is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_due_date() {
        let raw = r#"{"id":7,"text":"x","completed":false,"dueDate":"2024-02-30","createdAt":"2024-03-10T09:15:00.000Z"}"#;
        assert!(serde_json::from_str::<Task>(raw).is_err());
    }
}
