//! JSON encoding of the persisted task collection

use crate::models::task::{MAX_ID, Task};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur while encoding or decoding the collection
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a list of tasks, found {0}")]
    NotAList(&'static str),
}

/// Serialize the whole collection as a flat JSON array
pub fn encode_tasks(tasks: &[Task]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decode a persisted collection.
///
/// Fails only when the payload as a whole is unusable. Individual records that
/// don't describe a valid task (missing fields, bad dates, blank text, an id
/// above [`MAX_ID`], or an id already seen earlier in the list) are dropped
/// with a warning. Surrounding whitespace is trimmed from the text of the
/// records that are kept.
pub fn decode_tasks(content: &str) -> Result<Vec<Task>, CodecError> {
    let records = match serde_json::from_str::<Value>(content)? {
        Value::Array(records) => records,
        Value::Null => return Ok(Vec::new()),
        other => return Err(CodecError::NotAList(kind_of(&other))),
    };

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let mut task: Task = match serde_json::from_value(record) {
            Ok(task) => task,
            Err(e) => {
                log::warn!("Dropping malformed task record #{}: {}", index, e);
                continue;
            }
        };

        if task.text.trim().is_empty() {
            log::warn!("Dropping task {} with blank text", task.id);
            continue;
        }
        task.text = task.text.trim().to_string();

        if task.id > MAX_ID {
            log::warn!("Dropping task with out-of-range id {}", task.id);
            continue;
        }

        if !seen.insert(task.id) {
            log::warn!("Dropping task with duplicate id {}", task.id);
            continue;
        }

        tasks.push(task);
    }

    Ok(tasks)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
