//! Undo/Redo history for annotation edits.
//!
//! Every committed measurement, polygon and annotation, and every Clear All,
//! is recorded as a [`HistoryAction`] in the [`CommandHistory`]. The history is
//! a single list with a cursor; recording after an undo discards the redo tail.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//!
//! ## Module Structure
//!
//! - [`commands`] - HistoryAction enum defining all reversible operations
//! - [`command_history`] - CommandHistory resource for tracking state
//! - [`execute`] - Execute functions for undo/redo operations
//! - [`systems`] - Bevy systems for requests and keyboard shortcuts

mod command_history;
mod commands;
mod execute;
mod systems;


// Re-exports
pub use command_history::CommandHistory;
pub use commands::HistoryAction;
pub use execute::{execute_redo, execute_undo};
pub use systems::{handle_history_shortcuts, handle_redo, handle_undo};
