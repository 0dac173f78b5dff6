//! Data models for tasklist

pub mod codec;
pub mod task;

pub use codec::{CodecError, decode_tasks, encode_tasks};
pub use task::{MAX_ID, Task, TaskState};
