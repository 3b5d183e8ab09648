//! # Tasklist Architecture
//!
//! Tasklist is an interactive to-do list: one process, one JSON file, one
//! read-eval loop over standard input and output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses flags, resolves config, installs logging          │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs, prompt.rs, render.rs)                 │
//! │  - Action loop, prompt/validate/retry, table output         │
//! │  - Generic over reader, writer, store and clock             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Commands (api.rs, commands/*.rs)                     │
//! │  - Owns the in-memory list; add / edit / delete             │
//! │  - No terminal I/O; returns messages in a CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - TaskStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rows, not IDs
//!
//! Tasks are addressed by their 1-based row in the current list. Deleting a
//! row moves every later task up by one; the `id` written to disk is just the
//! row number at save time.
//!
//! ## Testing Strategy
//!
//! - Validators, renderer and commands are pure and tested directly.
//! - The session is driven with in-memory input/output, an `InMemoryStore`
//!   and a `FixedClock`, so whole transcripts are checked without a terminal.
//! - `tests/` runs the compiled binary against a temporary file.
//!
//! ## Module Overview
//!
//! - [`api`]: the list owner and entry point for all operations
//! - [`commands`]: add, edit and delete
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Task` and `Priority`
//! - [`validate`]: input parsing
//! - [`prompt`]: the interactive retry loops
//! - [`render`]: the fixed-width table
//! - [`session`]: the action loop
//! - [`clock`]: "today" at a fixed UTC offset
//! - [`config`]: settings and their defaults
//! - [`error`]: error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod render;
pub mod session;
pub mod store;
pub mod styles;
pub mod validate;
