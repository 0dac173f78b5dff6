//! In-memory task collection backed by a persistence slot

use crate::clock::{Clock, SystemClock};
use crate::models::{Task, decode_tasks, encode_tasks};
use crate::query::{self, FilterMode, TaskStats};
use crate::storage::id_generator::IdGenerator;
use crate::storage::slot::{Storage, TASKS_KEY};
use chrono::NaiveDate;

/// Change notifications emitted after each successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Loaded { count: usize },
    Added(Task),
    Toggled { id: u64, completed: bool },
    Deleted(u64),
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Ordered task collection.
///
/// The collection is read from storage when the store is opened and written
/// back in full after every mutation. None of the operations fail: unusable
/// persisted data reads as an empty list, blank text and unknown ids are
/// ignored, and storage write errors are logged.
pub struct TaskStore<S: Storage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    tasks: Vec<Task>,
    ids: IdGenerator,
    listeners: Vec<Listener>,
}

impl<S: Storage> TaskStore<S> {
    /// Open a store on the system clock
    pub fn open(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> TaskStore<S, C> {
    /// Open a store with an explicit clock
    pub fn with_clock(storage: S, clock: C) -> Self {
        let mut store = TaskStore {
            storage,
            clock,
            tasks: Vec::new(),
            ids: IdGenerator::default(),
            listeners: Vec::new(),
        };
        store.load();
        store
    }

    /// Re-read the collection from storage
    pub fn load(&mut self) -> &[Task] {
        self.tasks = read_tasks(&self.storage);
        self.ids.observe(&self.tasks);
        log::debug!("Loaded {} tasks", self.tasks.len());

        self.emit(StoreEvent::Loaded {
            count: self.tasks.len(),
        });
        &self.tasks
    }

    /// Append a new pending task.
    ///
    /// Returns `None` without touching the collection if `text` is blank or
    /// no unused id is left.
    pub fn add(&mut self, text: &str, due_date: Option<NaiveDate>) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let now = self.clock.now();
        let Some(id) = self.ids.next_id(now) else {
            log::error!("No task ids left; not adding {:?}", text);
            return None;
        };
        let task = Task::new(id, text, due_date, now);
        self.tasks.push(task.clone());
        self.persist();

        self.emit(StoreEvent::Added(task.clone()));
        Some(task)
    }

    /// Flip a task's completion flag, returning the new value
    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let completed = self.tasks.iter_mut().find(|t| t.id == id)?.toggle();
        self.persist();

        self.emit(StoreEvent::Toggled { id, completed });
        Some(completed)
    }

    /// Remove a task, returning whether it existed
    pub fn delete(&mut self, id: u64) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };

        self.tasks.remove(index);
        self.persist();

        self.emit(StoreEvent::Deleted(id));
        true
    }

    /// All tasks in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn filtered_view(&self, mode: FilterMode, today: NaiveDate) -> Vec<&Task> {
        query::filtered_view(&self.tasks, mode, today)
    }

    pub fn stats(&self, today: NaiveDate) -> TaskStats {
        query::stats(&self.tasks, today)
    }

    /// Register a listener called after every load and mutation
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write the whole collection back to storage
    fn persist(&mut self) {
        let content = match encode_tasks(&self.tasks) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to encode tasks: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(TASKS_KEY, &content) {
            log::error!("Failed to save tasks: {}", e);
        }
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

/// Read the persisted collection, treating anything unusable as empty
fn read_tasks<S: Storage>(storage: &S) -> Vec<Task> {
    let content = match storage.get(TASKS_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Failed to read saved tasks: {}", e);
            return Vec::new();
        }
    };

    decode_tasks(&content).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable saved tasks: {}", e);
        Vec::new()
    })
}
