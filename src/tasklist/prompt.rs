//! Interactive prompts.
//!
//! A [`Prompter`] pairs an input reader with an output writer and offers one
//! `read_*` method per kind of value. Each method prints its prompt, reads a
//! line, validates it with [`crate::validate`], and loops until the input is
//! acceptable. Only a closed input stream ends a loop early
//! ([`TasklistError::InputClosed`]).

use crate::error::{Result, TasklistError};
use crate::model::Priority;
use crate::validate::{self, Field};
use chrono::{NaiveDate, NaiveTime};
use std::io::{BufRead, Write};
use tracing::debug;

pub const ACTION_PROMPT: &str = "Input an action (add, print, edit, delete, end):";
pub const PRIORITY_PROMPT: &str = "Input the task priority (C, H, N, L):";
pub const DATE_PROMPT: &str = "Input the date (yyyy-mm-dd):";
pub const TIME_PROMPT: &str = "Input the time (hh:mm):";
pub const BODY_PROMPT: &str = "Input a new task (enter a blank line to end):";
pub const FIELD_PROMPT: &str = "Input a field to edit (priority, date, time, task):";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `prompt` and returns the next input line without its line ending.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.read_line()
    }

    // Bytes that are not UTF-8 become U+FFFD and fail validation downstream.
    fn read_line(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(TasklistError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Re-prompts silently until one of `C, H, N, L` is entered.
    pub fn read_priority(&mut self) -> Result<Priority> {
        loop {
            let line = self.ask(PRIORITY_PROMPT)?;
            match validate::parse_priority(&line) {
                Ok(priority) => return Ok(priority),
                Err(_) => debug!(input = %line, "rejected priority"),
            }
        }
    }

    pub fn read_date(&mut self) -> Result<NaiveDate> {
        loop {
            let line = self.ask(DATE_PROMPT)?;
            match validate::parse_date(&line) {
                Ok(date) => return Ok(date),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    pub fn read_time(&mut self) -> Result<NaiveTime> {
        loop {
            let line = self.ask(TIME_PROMPT)?;
            match validate::parse_time(&line) {
                Ok(time) => return Ok(time),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Reads body lines until a blank one and returns the wrapped chunks.
    ///
    /// A blank first line returns an empty vector; the caller decides what an
    /// empty body means.
    pub fn read_task_body(&mut self) -> Result<Vec<String>> {
        self.say(BODY_PROMPT)?;
        let mut chunks = Vec::new();
        loop {
            let wrapped = validate::wrap_line(&self.read_line()?);
            if wrapped.is_empty() {
                return Ok(chunks);
            }
            chunks.extend(wrapped);
        }
    }

    /// Asks for a row number in `1..=len` and returns its zero-based index.
    pub fn read_task_index(&mut self, len: usize) -> Result<usize> {
        let prompt = format!("Input the task number (1-{}):", len);
        loop {
            let line = self.ask(&prompt)?;
            match validate::parse_task_number(&line, len) {
                Ok(index) => return Ok(index),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    pub fn read_field(&mut self) -> Result<Field> {
        loop {
            let line = self.ask(FIELD_PROMPT)?;
            match line.parse::<Field>() {
                Ok(field) => return Ok(field),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }
}
