use crate::commands::{CmdMessage, CmdResult, FieldEdit};
use crate::error::{Result, TasklistError};
use crate::model::Task;
use crate::validate::ValidationError;
use tracing::debug;

pub fn run(tasks: &mut [Task], index: usize, edit: FieldEdit) -> Result<CmdResult> {
    let task = tasks
        .get_mut(index)
        .ok_or(TasklistError::TaskNotFound(index + 1))?;
    let mut result = CmdResult::default();

    match edit {
        FieldEdit::Priority(priority) => task.priority = priority,
        FieldEdit::Date(date) => task.date = date,
        FieldEdit::Time(time) => task.time = time,
        // A task keeps its old body rather than becoming empty.
        FieldEdit::Lines(lines) if lines.is_empty() => {
            debug!(row = index + 1, "blank body, task left unchanged");
            result.add_message(CmdMessage::warning(ValidationError::BlankTask.to_string()));
            return Ok(result);
        }
        FieldEdit::Lines(lines) => task.lines = lines,
    }

    debug!(row = index + 1, "task edited");
    result.add_message(CmdMessage::success("The task is changed"));
    Ok(result)
}
