//! # Command Loop
//!
//! A [`Session`] is the read-eval loop: it asks for an action, runs its
//! handler, and asks again. Only `end` leaves the loop, after the list has been
//! saved. Invalid input at any step is reported and the same step is asked
//! again; nothing short of a closed input stream or an I/O failure aborts the
//! session.
//!
//! | input    | handler                                   |
//! |----------|-------------------------------------------|
//! | `add`    | priority, date, time, body → append       |
//! | `print`  | table                                     |
//! | `edit`   | table, row number, field → overwrite      |
//! | `delete` | table, row number → remove                |
//! | `end`    | save, `Tasklist exiting!`                 |
//!
//! `edit` and `delete` skip their handler when the list is empty; the table
//! has already said `No tasks have been input`.

use crate::api::TasklistApi;
use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult, FieldEdit, MessageLevel};
use crate::error::Result;
use crate::model::Task;
use crate::prompt::{Prompter, ACTION_PROMPT};
use crate::store::TaskStore;
use crate::validate::Field;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

pub const INVALID_ACTION: &str = "The input action is invalid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Action::Add),
            "print" => Ok(Action::Print),
            "edit" => Ok(Action::Edit),
            "delete" => Ok(Action::Delete),
            "end" => Ok(Action::End),
            _ => Err(format!("unknown action: {}", s)),
        }
    }
}

pub struct Session<S: TaskStore, C: Clock, R, W> {
    api: TasklistApi<S>,
    clock: C,
    prompter: Prompter<R, W>,
    color: bool,
}

impl<S, C, R, W> Session<S, C, R, W>
where
    S: TaskStore,
    C: Clock,
    R: BufRead,
    W: Write,
{
    pub fn new(api: TasklistApi<S>, clock: C, prompter: Prompter<R, W>, color: bool) -> Self {
        Self {
            api,
            clock,
            prompter,
            color,
        }
    }

    /// Runs until `end`. Returns once the list has been saved.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let input = self.prompter.ask(ACTION_PROMPT)?;
            let action = match input.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    debug!("{}", e);
                    self.prompter.say(INVALID_ACTION)?;
                    continue;
                }
            };
            debug!(?action, "dispatching");

            match action {
                Action::Add => self.handle_add()?,
                Action::Print => {
                    self.handle_print()?;
                }
                Action::Edit => {
                    if self.handle_print()? {
                        self.handle_edit()?;
                    }
                }
                Action::Delete => {
                    if self.handle_print()? {
                        self.handle_delete()?;
                    }
                }
                Action::End => {
                    let result = self.api.save()?;
                    self.print_messages(&result)?;
                    return Ok(());
                }
            }
        }
    }

    pub fn into_parts(self) -> (TasklistApi<S>, W) {
        (self.api, self.prompter.into_output())
    }

    fn handle_add(&mut self) -> Result<()> {
        let priority = self.prompter.read_priority()?;
        let date = self.prompter.read_date()?;
        let time = self.prompter.read_time()?;
        let lines = self.prompter.read_task_body()?;
        let result = self.api.add_task(Task::new(priority, date, time, lines));
        self.print_messages(&result)
    }

    /// Prints the table. Returns `false` when there was nothing to print.
    fn handle_print(&mut self) -> Result<bool> {
        let today = self.clock.today();
        for line in self.api.render(today, self.color) {
            self.prompter.say(&line)?;
        }
        Ok(!self.api.is_empty())
    }

    fn handle_edit(&mut self) -> Result<()> {
        let index = self.prompter.read_task_index(self.api.len())?;
        let edit = match self.prompter.read_field()? {
            Field::Priority => FieldEdit::Priority(self.prompter.read_priority()?),
            Field::Date => FieldEdit::Date(self.prompter.read_date()?),
            Field::Time => FieldEdit::Time(self.prompter.read_time()?),
            Field::Task => FieldEdit::Lines(self.prompter.read_task_body()?),
        };
        let result = self.api.edit_task(index, edit)?;
        self.print_messages(&result)
    }

    fn handle_delete(&mut self) -> Result<()> {
        let index = self.prompter.read_task_index(self.api.len())?;
        let result = self.api.delete_task(index)?;
        self.print_messages(&result)
    }

    fn print_messages(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            let text = self.styled(message);
            self.prompter.say(&text)?;
        }
        Ok(())
    }

    fn styled(&self, message: &CmdMessage) -> String {
        if !self.color {
            return message.content.clone();
        }
        match message.level {
            MessageLevel::Info => message.content.clone(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
        }
    }
}
