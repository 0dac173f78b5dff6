//! CLI command definitions using clap

use crate::query::FilterMode;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Personal task list with due dates
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding saved tasks (defaults to the platform data directory)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Reference date for due-date checks (YYYY-MM-DD, defaults to today in UTC)
    #[arg(long, global = true, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },

    /// List tasks
    List {
        /// Which tasks to show (all, pending, completed, overdue)
        #[arg(short, long, value_parser = parse_filter, default_value = "all")]
        filter: FilterMode,
    },

    /// Flip task(s) between pending and completed
    Toggle {
        /// Task ID(s)
        #[arg(required = true)]
        ids: Vec<u64>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show task statistics
    Stats,
}

fn parse_filter(s: &str) -> Result<FilterMode, String> {
    s.parse()
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid date: {}", e))
}
