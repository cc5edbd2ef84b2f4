//! Daily List - single-screen daily task list for the terminal
//!
//! Users add, complete, delete, and bulk-clear tasks; the sequence is
//! persisted to local storage across restarts.
//!
//! # Architecture
//!
//! - [`domain`] - the Task record and pure sequence operations
//! - [`controller`] - single owner and sole mutator of the task sequence
//! - [`store`] - persistence adapter over the `keystore` crate
//! - [`tui`] - ratatui rendering and keyboard interaction
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//!
//! Every mutation flows one way: key event -> queued intent -> controller
//! operation -> snapshot persisted -> view re-rendered from the new state.

pub mod cli;
pub mod config;
pub mod controller;
pub mod domain;
pub mod store;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use controller::TaskController;
pub use domain::{AddError, Task, TaskStats};
pub use store::{TASKS_KEY, TaskStore};
