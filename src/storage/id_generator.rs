//! Timestamp-based ID generation for tasks

use chrono::{DateTime, Utc};

use crate::models::{MAX_ID, Task};

/// Issues task ids from creation timestamps (milliseconds since the epoch).
///
/// Ids never repeat within one generator: if the clock hasn't advanced past
/// the last issued id, the next id is the last one plus one.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Make sure no id in `tasks` will be handed out again
    pub fn observe(&mut self, tasks: &[Task]) {
        self.last = self.last.max(Self::find_max_id(tasks));
    }

    /// Next id for a task created at `now`, or `None` once ids are exhausted
    pub fn next_id(&mut self, now: DateTime<Utc>) -> Option<u64> {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last.checked_add(1)?);
        if id > MAX_ID {
            return None;
        }
        self.last = id;
        Some(id)
    }

    /// Find the maximum id in a collection
    pub fn find_max_id(tasks: &[Task]) -> u64 {
        tasks.iter().map(|t| t.id).max().unwrap_or(0)
    }
}
