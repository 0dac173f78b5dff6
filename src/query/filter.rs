//! Filter modes and collection statistics

use crate::models::{Task, TaskState};
use chrono::NaiveDate;
use std::fmt;

/// Which subset of tasks a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Completed,
    Overdue,
}

impl FilterMode {
    /// Check if a task belongs in this view
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Pending => task.state() == TaskState::Pending,
            FilterMode::Completed => task.state() == TaskState::Completed,
            FilterMode::Overdue => is_overdue(task, today),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Pending => write!(f, "pending"),
            FilterMode::Completed => write!(f, "completed"),
            FilterMode::Overdue => write!(f, "overdue"),
        }
    }
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "pending" | "open" => Ok(FilterMode::Pending),
            "completed" | "done" => Ok(FilterMode::Completed),
            "overdue" => Ok(FilterMode::Overdue),
            _ => Err(format!("Unknown filter: {}", s)),
        }
    }
}

/// An incomplete task whose due date is strictly before `today`
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    task.is_pending() && task.due_date.is_some_and(|due| due < today)
}

/// Select the tasks shown by `mode`, keeping insertion order
pub fn filtered_view(tasks: &[Task], mode: FilterMode, today: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| mode.matches(t, today)).collect()
}

/// Task statistics
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// Count tasks over the whole (unfiltered) collection
pub fn stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..Default::default()
    };

    for task in tasks {
        match task.state() {
            TaskState::Pending => stats.pending += 1,
            TaskState::Completed => stats.completed += 1,
        }

        if is_overdue(task, today) {
            stats.overdue += 1;
        }
    }

    stats
}

/// One-line summary; the overdue count only appears when non-zero
impl fmt::Display for TaskStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} | Pending: {} | Completed: {}",
            self.total, self.pending, self.completed
        )?;
        if self.overdue > 0 {
            write!(f, " | Overdue: {}", self.overdue)?;
        }
        Ok(())
    }
}
