//! tasklist - a personal task list with due dates
//!
//! This library provides the task store, persisted as one JSON list in a
//! named key-value slot, and pure filtering and due-date classification over
//! its contents. Presentation layers call into it; the `tasklist` binary is
//! one such layer.

pub mod cli;
pub mod clock;
pub mod models;
pub mod query;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{Task, TaskState};
pub use query::{FilterMode, Severity, TaskStats, Urgency};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageLocation, StoreEvent, TaskStore};
