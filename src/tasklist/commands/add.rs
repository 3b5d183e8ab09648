use crate::commands::{CmdMessage, CmdResult};
use crate::model::{renumber, Task};
use crate::validate::ValidationError;
use tracing::debug;

/// Appends `task` unless its body is empty, in which case it is discarded.
pub fn run(tasks: &mut Vec<Task>, task: Task) -> CmdResult {
    let mut result = CmdResult::default();

    if task.lines.is_empty() {
        debug!("discarding task with blank body");
        result.add_message(CmdMessage::warning(ValidationError::BlankTask.to_string()));
        return result;
    }

    tasks.push(task);
    renumber(tasks);
    debug!(count = tasks.len(), "task added");
    result
}
