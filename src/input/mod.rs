//! Input handling module for keyboard and command processing.
//!
//! All keyboard input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Executed by [`App::execute_command`](crate::app::App::execute_command)
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App mutation
//! ```

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
