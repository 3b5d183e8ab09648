use super::{decode, encode, TaskStore};
use crate::error::Result;
use crate::model::Task;

/// In-memory storage for testing.
///
/// Keeps the encoded document rather than the tasks themselves so tests see
/// exactly what would have been written to disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `document`, as if read from disk.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            saves: 0,
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of times [`TaskStore::save`] has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Task>> {
        match &self.document {
            Some(doc) => decode(doc),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.document = Some(encode(tasks)?);
        self.saves += 1;
        Ok(())
    }
}
