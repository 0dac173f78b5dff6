//! Pure queries over a task snapshot

pub mod filter;
pub mod urgency;

pub use filter::{FilterMode, TaskStats, filtered_view, is_overdue, stats};
pub use urgency::{Severity, Urgency, days_until, due_date_urgency};
