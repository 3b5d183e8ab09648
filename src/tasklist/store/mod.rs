//! # Storage Layer
//!
//! The list is persisted as one JSON array, read once when a session starts
//! and written once when it ends. [`TaskStore`] hides where that document
//! lives so the session can be driven against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the backing file (`tasklist.json` by default)
//! - [`memory::InMemoryStore`]: keeps the serialized document in a `String`
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {"id":1,"priority":"H","date":[2023,6,20],"time":[9,0],"tasks":["Buy milk    ..."]}
//! ]
//! ```
//!
//! Both stores go through [`encode`] and [`decode`] so the document is
//! byte-for-byte the same regardless of backend.

use crate::error::Result;
use crate::model::Task;

pub mod fs;
pub mod memory;

pub trait TaskStore {
    /// Load the whole list. A store with nothing saved yields an empty list.
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the saved list with `tasks`.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}

pub fn encode(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

pub fn decode(content: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(content)?)
}
