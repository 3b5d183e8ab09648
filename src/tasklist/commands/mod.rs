//! List mutations.
//!
//! Each command takes the in-memory list and already-validated input, changes
//! the list, and reports what happened as a [`CmdResult`]. Nothing here reads
//! from or writes to the terminal; the session prints the messages.

use chrono::{NaiveDate, NaiveTime};

pub mod add;
pub mod delete;
pub mod edit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// A replacement value for one field of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Priority(crate::model::Priority),
    Date(NaiveDate),
    Time(NaiveTime),
    Lines(Vec<String>),
}
