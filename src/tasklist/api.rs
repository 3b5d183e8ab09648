//! # API Facade
//!
//! [`TasklistApi`] owns the store and the in-memory list for the lifetime of a
//! session. The list is loaded once by [`TasklistApi::open`], mutated through
//! the command layer, and written back once by [`TasklistApi::save`]; there is
//! no intermediate flushing.
//!
//! Like the commands beneath it, the facade never touches the terminal. It is
//! generic over [`TaskStore`] so the same session logic runs against a file in
//! production and against memory in tests.

use crate::commands::{self, CmdMessage, CmdResult, FieldEdit};
use crate::error::Result;
use crate::model::{renumber, Task};
use crate::render;
use crate::store::TaskStore;
use chrono::NaiveDate;
use tracing::debug;

pub const EXIT_MESSAGE: &str = "Tasklist exiting!";

pub struct TasklistApi<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: TaskStore> TasklistApi<S> {
    /// Loads the saved list from `store`.
    pub fn open(store: S) -> Result<Self> {
        let tasks = store.load()?;
        debug!(count = tasks.len(), "session opened");
        Ok(Self { store, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_task(&mut self, task: Task) -> CmdResult {
        commands::add::run(&mut self.tasks, task)
    }

    pub fn edit_task(&mut self, index: usize, edit: FieldEdit) -> Result<CmdResult> {
        commands::edit::run(&mut self.tasks, index, edit)
    }

    pub fn delete_task(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.tasks, index)
    }

    pub fn render(&self, today: NaiveDate, color: bool) -> Vec<String> {
        render::render_task_list(&self.tasks, today, color)
    }

    /// Writes the list back to the store, replacing whatever was there.
    pub fn save(&mut self) -> Result<CmdResult> {
        renumber(&mut self.tasks);
        self.store.save(&self.tasks)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(EXIT_MESSAGE));
        Ok(result)
    }
}
