use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TasklistError};
use crate::model::{renumber, Task};
use tracing::debug;

/// Removes the task at `index`; later tasks move up one row.
pub fn run(tasks: &mut Vec<Task>, index: usize) -> Result<CmdResult> {
    if index >= tasks.len() {
        return Err(TasklistError::TaskNotFound(index + 1));
    }

    tasks.remove(index);
    renumber(tasks);
    debug!(row = index + 1, remaining = tasks.len(), "task deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("The task is deleted"));
    Ok(result)
}
