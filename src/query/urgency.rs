//! Due-date urgency classification

use crate::models::Task;
use chrono::NaiveDate;
use std::fmt;

/// How pressing a task's due date is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Overdue,
    DueToday,
    DueTomorrow,
    DueSoon,
    DueLater,
    /// No due date
    Neutral,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Overdue => write!(f, "overdue"),
            Severity::DueToday => write!(f, "due-today"),
            Severity::DueTomorrow => write!(f, "due-tomorrow"),
            Severity::DueSoon => write!(f, "due-soon"),
            Severity::DueLater => write!(f, "due-later"),
            Severity::Neutral => write!(f, "none"),
        }
    }
}

/// A severity plus a human-readable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Urgency {
    pub label: String,
    pub severity: Severity,
}

impl Urgency {
    pub fn neutral() -> Self {
        Urgency {
            label: String::new(),
            severity: Severity::Neutral,
        }
    }
}

/// Whole days from `today` until the task's due date (negative when past)
pub fn days_until(task: &Task, today: NaiveDate) -> Option<i64> {
    task.due_date.map(|due| (due - today).num_days())
}

/// Classify a task's due date relative to `today`.
///
/// Only the date matters here; the completion flag is left to the caller.
pub fn due_date_urgency(task: &Task, today: NaiveDate) -> Urgency {
    let Some(days) = days_until(task, today) else {
        return Urgency::neutral();
    };

    let (severity, label) = match days {
        d if d < 0 => (
            Severity::Overdue,
            format!("Overdue by {}", plural_days(d.unsigned_abs())),
        ),
        0 => (Severity::DueToday, "Due today".to_string()),
        1 => (Severity::DueTomorrow, "Due tomorrow".to_string()),
        2..=3 => (Severity::DueSoon, format!("Due in {} days", days)),
        _ => (Severity::DueLater, format!("Due in {} days", days)),
    };

    Urgency { label, severity }
}

fn plural_days(n: u64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}
