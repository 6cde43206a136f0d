//! Input context for determining which commands are available.

use crate::app::{App, Screen};
use crate::view_model::LoginField;

/// The application state relevant to key dispatch.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub screen: Screen,
    /// Focused login field
    pub login_focus: LoginField,
    /// Whether the password field is empty (Enter on email moves focus)
    pub password_is_empty: bool,
    /// Whether a login request is in flight
    pub submitting: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_app(app: &App) -> Self {
        Self {
            screen: app.screen,
            login_focus: app.login.focus,
            password_is_empty: app.login.password.is_empty(),
            submitting: app.login.submitting,
        }
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_login_focus(mut self, focus: LoginField) -> Self {
        self.login_focus = focus;
        self
    }

    pub fn with_password(mut self, filled: bool) -> Self {
        self.password_is_empty = !filled;
        self
    }

    pub fn with_submitting(mut self, submitting: bool) -> Self {
        self.submitting = submitting;
        self
    }
}
