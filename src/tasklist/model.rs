use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width, in characters, of every stored task line.
pub const LINE_WIDTH: usize = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "C")]
    Critical,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Normal,
        Priority::Low,
    ];

    pub fn code(self) -> char {
        match self {
            Priority::Critical => 'C',
            Priority::High => 'H',
            Priority::Normal => 'N',
            Priority::Low => 'L',
        }
    }

    /// Looks up a priority by its one-letter code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let c = c.to_ascii_uppercase();
                Self::ALL.into_iter().find(|p| p.code() == c)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of the list.
///
/// The serialized shape is the on-disk format:
/// `{"id":1,"priority":"H","date":[2023,6,20],"time":[9,0],"tasks":["..."]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 1-based row number as of the last renumbering. Display only.
    #[serde(rename = "id")]
    pub position: usize,
    pub priority: Priority,
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    #[serde(with = "hm")]
    pub time: NaiveTime,
    /// Body chunks, each exactly [`LINE_WIDTH`] characters wide.
    #[serde(rename = "tasks", deserialize_with = "body::deserialize")]
    pub lines: Vec<String>,
}

impl Task {
    pub fn new(priority: Priority, date: NaiveDate, time: NaiveTime, lines: Vec<String>) -> Self {
        Self {
            position: 0,
            priority,
            date,
            time,
            lines,
        }
    }
}

/// Rewrites every task's position to its current 1-based row.
pub fn renumber(tasks: &mut [Task]) {
    for (i, task) in tasks.iter_mut().enumerate() {
        task.position = i + 1;
    }
}

mod ymd {
    use super::*;
    use serde::de::Error;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        [date.year(), date.month() as i32, date.day() as i32].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let [year, month, day] = <[i32; 3]>::deserialize(d)?;
        u32::try_from(month)
            .ok()
            .zip(u32::try_from(day).ok())
            .and_then(|(m, dd)| NaiveDate::from_ymd_opt(year, m, dd))
            .ok_or_else(|| D::Error::custom(format!("invalid date [{year},{month},{day}]")))
    }
}

/// Re-cuts stored lines to [`LINE_WIDTH`] on load. Short lines are padded and
/// long ones split; a task with no lines is rejected.
mod body {
    use super::LINE_WIDTH;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        let stored = Vec::<String>::deserialize(d)?;
        if stored.is_empty() {
            return Err(D::Error::custom("task has no lines"));
        }
        Ok(stored.iter().map(String::as_str).flat_map(fit).collect())
    }

    fn fit(line: &str) -> Vec<String> {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            return vec![" ".repeat(LINE_WIDTH)];
        }
        chars
            .chunks(LINE_WIDTH)
            .map(|chunk| {
                let text: String = chunk.iter().collect();
                format!("{:<width$}", text, width = LINE_WIDTH)
            })
            .collect()
    }
}

mod hm {
    use super::*;
    use serde::de::Error;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        [time.hour(), time.minute()].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let [hour, minute] = <[u32; 2]>::deserialize(d)?;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| D::Error::custom(format!("invalid time [{hour},{minute}]")))
    }
}
