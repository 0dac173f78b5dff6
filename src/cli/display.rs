//! Display formatting for CLI output

use crate::models::Task;
use crate::query::{TaskStats, due_date_urgency};
use chrono::NaiveDate;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Task row for table display
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Text")]
    text: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Urgency")]
    urgency: String,
}

impl TaskRow {
    fn new(task: &Task, today: NaiveDate) -> Self {
        // Completed tasks only show their date, not how late they are
        let urgency = if !task.is_pending() {
            String::new()
        } else {
            due_date_urgency(task, today).label
        };

        TaskRow {
            id: task.id.to_string(),
            state: task.state().to_string(),
            text: truncate(&task.text, 40),
            due: task.due_date.map(format_due_date).unwrap_or_default(),
            urgency,
        }
    }
}

/// Display a list of tasks as a table
pub fn display_task_list(tasks: &[&Task], today: NaiveDate) {
    if tasks.is_empty() {
        log::info!("No tasks found.");
        return;
    }

    let rows: Vec<TaskRow> = tasks.iter().map(|t| TaskRow::new(t, today)).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Stats row for table display
#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Display task statistics
pub fn display_stats(stats: &TaskStats) {
    let rows = vec![
        StatsRow {
            metric: "Total",
            count: stats.total,
        },
        StatsRow {
            metric: "Pending",
            count: stats.pending,
        },
        StatsRow {
            metric: "Completed",
            count: stats.completed,
        },
        StatsRow {
            metric: "Overdue",
            count: stats.overdue,
        },
    ];

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Format a due date for display, e.g. `Mar 15, 2024`
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format for success messages
pub fn success(msg: &str) {
    println!("{}", msg);
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}
