//! Input validators.
//!
//! Every function here is pure: it takes the raw line the user typed and either
//! returns the typed value or a [`ValidationError`] whose `Display` text is the
//! exact message shown before re-prompting. The prompt loops live in
//! [`crate::prompt`].

use crate::model::{Priority, LINE_WIDTH};
use chrono::{NaiveDate, NaiveTime};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid priority")]
    Priority,

    #[error("The input date is invalid")]
    Date,

    #[error("The input time is invalid")]
    Time,

    #[error("Invalid task number")]
    TaskNumber,

    #[error("Invalid field")]
    Field,

    #[error("The task is blank")]
    BlankTask,
}

/// An editable column of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Priority,
    Date,
    Time,
    Task,
}

impl FromStr for Field {
    type Err = ValidationError;

    // Field names are matched exactly; only actions and priorities ignore case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(Field::Priority),
            "date" => Ok(Field::Date),
            "time" => Ok(Field::Time),
            "task" => Ok(Field::Task),
            _ => Err(ValidationError::Field),
        }
    }
}

pub fn parse_priority(input: &str) -> Result<Priority, ValidationError> {
    Priority::from_code(input).ok_or(ValidationError::Priority)
}

/// Parses `yyyy-mm-dd` into a calendar-valid date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let parts = segments(input, '-', 3).ok_or(ValidationError::Date)?;
    let year = i32::try_from(parts[0]).map_err(|_| ValidationError::Date)?;
    let month = u32::try_from(parts[1]).map_err(|_| ValidationError::Date)?;
    let day = u32::try_from(parts[2]).map_err(|_| ValidationError::Date)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::Date)
}

/// Parses `hh:mm` on a 24-hour clock.
pub fn parse_time(input: &str) -> Result<NaiveTime, ValidationError> {
    let parts = segments(input, ':', 2).ok_or(ValidationError::Time)?;
    let hour = u32::try_from(parts[0]).map_err(|_| ValidationError::Time)?;
    let minute = u32::try_from(parts[1]).map_err(|_| ValidationError::Time)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(ValidationError::Time)
}

/// Accepts the literal row number `1..=len` and returns its zero-based index.
///
/// Only the canonical spelling is accepted: `"01"`, `"+1"` or `" 1"` are
/// rejected even though they name a valid row.
pub fn parse_task_number(input: &str, len: usize) -> Result<usize, ValidationError> {
    let n: usize = input.parse().map_err(|_| ValidationError::TaskNumber)?;
    if n == 0 || n > len || n.to_string() != input {
        return Err(ValidationError::TaskNumber);
    }
    Ok(n - 1)
}

/// Splits one line of body text into space-padded chunks of [`LINE_WIDTH`]
/// characters. A blank line yields no chunks.
pub fn wrap_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.trim().chars().collect();
    chars
        .chunks(LINE_WIDTH)
        .map(|chunk| {
            let text: String = chunk.iter().collect();
            format!("{:<width$}", text, width = LINE_WIDTH)
        })
        .collect()
}

fn segments(input: &str, sep: char, count: usize) -> Option<Vec<i64>> {
    let parts = input
        .split(sep)
        .map(|s| s.parse().ok())
        .collect::<Option<Vec<i64>>>()?;
    (parts.len() == count).then_some(parts)
}
