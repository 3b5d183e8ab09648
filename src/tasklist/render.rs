//! # Table Rendering
//!
//! Turns a snapshot of the list into the fixed-width table printed by the
//! `print`, `edit` and `delete` actions:
//!
//! ```text
//! +----+------------+-------+---+---+--------------------------------------------+
//! | N  |    Date    | Time  | P | D |                   Task                     |
//! +----+------------+-------+---+---+--------------------------------------------+
//! | 1  | 2023-06-20 | 09:00 | ▮ | ▮ |Buy milk                                    |
//! +----+------------+-------+---+---+--------------------------------------------+
//! ```
//!
//! The `P` and `D` cells hold a single colored block (priority and due tag).
//! Everything here is pure: "today" and the color switch are parameters, the
//! output is a list of lines.

use crate::model::{Priority, Task, LINE_WIDTH};
use crate::styles;
use chrono::NaiveDate;

pub const EMPTY_MESSAGE: &str = "No tasks have been input";

const HEADER_RULE: &str =
    "+----+------------+-------+---+---+--------------------------------------------+";
const HEADER_TITLES: &str =
    "| N  |    Date    | Time  | P | D |                   Task                     |";
const CONTINUATION_PREFIX: &str = "|    |            |       |   |   |";

/// Where a task's date falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueToday,
    Upcoming,
}

impl DueStatus {
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        match date.signed_duration_since(today).num_days() {
            n if n < 0 => DueStatus::Overdue,
            0 => DueStatus::DueToday,
            _ => DueStatus::Upcoming,
        }
    }
}

pub fn priority_tag(priority: Priority, color: bool) -> String {
    styles::block(styles::for_priority(priority), color)
}

pub fn due_tag(status: DueStatus, color: bool) -> String {
    styles::block(styles::for_due(status), color)
}

/// Renders the whole table, or the single empty-list message.
pub fn render_task_list(tasks: &[Task], today: NaiveDate, color: bool) -> Vec<String> {
    if tasks.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }

    let separator = format!("+----+------------+-------+---+---+{}+", "-".repeat(LINE_WIDTH));
    let mut out = vec![
        HEADER_RULE.to_string(),
        HEADER_TITLES.to_string(),
        HEADER_RULE.to_string(),
    ];

    for (i, task) in tasks.iter().enumerate() {
        let mut lines = task.lines.iter();
        let first = lines.next().map(String::as_str).unwrap_or_default();
        out.push(format!(
            "| {:<2} | {} | {} | {} | {} |{}|",
            i + 1,
            task.date.format("%Y-%m-%d"),
            task.time.format("%H:%M"),
            priority_tag(task.priority, color),
            due_tag(DueStatus::classify(task.date, today), color),
            first
        ));
        for line in lines {
            out.push(format!("{}{}|", CONTINUATION_PREFIX, line));
        }
        out.push(separator.clone());
    }

    out
}
