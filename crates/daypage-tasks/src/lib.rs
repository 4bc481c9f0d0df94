//! In-memory task list editor.
//!
//! Holds the to-do collection and the single inline edit session for one
//! page session. Every mutation goes through [`TaskListEditor`]; nothing here
//! touches the network or disk.

pub mod editor;
pub mod task;

pub use editor::{AddOutcome, EditOutcome, EditSession, TaskListEditor};
pub use task::{normalize_text, Task, TaskId};
