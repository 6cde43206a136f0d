//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum represents every user action, decoupling key
//! bindings from their effects.

use crate::view_model::FormInput;

/// Represents all possible commands that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, q)
    Quit,
    /// Return to the order listing (Esc on detail and debug)
    Back,

    // =========================================================================
    // Login Form
    // =========================================================================
    /// Edit the login form
    LoginInput(FormInput),
    /// Submit the login form (Enter)
    SubmitLogin,

    // =========================================================================
    // Order Listing
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Open the selected order (Enter)
    OpenSelected,
    /// Cycle the status filter (f)
    CycleFilter,
    /// Open the API probe panel (d)
    OpenDebug,
    /// Sign out (Shift+L)
    Logout,

    // =========================================================================
    // Order Detail
    // =========================================================================
    /// Show the previous order of the listing ([)
    PrevOrder,
    /// Show the next order of the listing (])
    NextOrder,

    /// Re-fetch the current screen, or rerun the probe battery (r)
    Reload,
}

impl Command {
    /// Whether this command is available while a login request is in flight.
    pub fn allowed_while_submitting(&self) -> bool {
        matches!(self, Command::Quit)
    }
}
