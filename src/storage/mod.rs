//! Storage layer for the task collection

pub mod id_generator;
pub mod location;
pub mod slot;
pub mod task_store;

pub use id_generator::IdGenerator;
pub use location::{StorageLocation, StorageLocationError};
pub use slot::{FileStorage, MemoryStorage, Storage, StorageError, TASKS_KEY};
pub use task_store::{StoreEvent, TaskStore};
