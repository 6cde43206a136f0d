//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the
//! current [`InputContext`]:
//! - Global bindings (Ctrl+C) are checked first
//! - Screen bindings come next
//! - On the login screen, remaining printable characters are form input

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Screen;
use crate::view_model::{FormInput, LoginField};

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let combo = KeyCombo::from_event(&key);

        let command = self
            .config
            .get_global(&combo)
            .or_else(|| self.config.get_screen(context.screen, &combo))
            .copied()
            .or_else(|| Self::text_input(context, &key))?;

        if context.screen == Screen::Login {
            if context.submitting && !command.allowed_while_submitting() {
                return None;
            }
            // Enter on the email field moves on until a password is typed.
            if command == Command::SubmitLogin
                && context.login_focus == LoginField::Email
                && context.password_is_empty
            {
                return Some(Command::LoginInput(FormInput::NextField));
            }
        }
        Some(command)
    }

    fn text_input(context: &InputContext, key: &KeyEvent) -> Option<Command> {
        if context.screen != Screen::Login
            || key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match key.code {
            KeyCode::Char(c) => Some(Command::LoginInput(FormInput::Char(c))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        make_key_event(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dispatch_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        for screen in [Screen::Login, Screen::Orders, Screen::OrderDetail, Screen::Debug] {
            let context = InputContext::new().with_screen(screen).with_submitting(true);
            let key = make_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(registry.dispatch(key, &context), Some(Command::Quit));
        }
    }

    #[test]
    fn test_login_chars_are_text_input() {
        let registry = CommandRegistry::new();
        let context = InputContext::new().with_screen(Screen::Login);

        // 'q' quits on the listing but is just a letter in the form
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('q')), &context),
            Some(Command::LoginInput(FormInput::Char('q')))
        );
        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Char('Q'), KeyModifiers::SHIFT), &context),
            Some(Command::LoginInput(FormInput::Char('Q')))
        );
    }

    #[test]
    fn test_login_enter_on_email_moves_focus() {
        let registry = CommandRegistry::new();
        let context = InputContext::new().with_screen(Screen::Login);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Enter), &context),
            Some(Command::LoginInput(FormInput::NextField))
        );

        let filled = context.clone().with_password(true);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Enter), &filled),
            Some(Command::SubmitLogin)
        );

        let on_password = context.with_login_focus(LoginField::Password);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Enter), &on_password),
            Some(Command::SubmitLogin)
        );
    }

    #[test]
    fn test_login_input_ignored_while_submitting() {
        let registry = CommandRegistry::new();
        let context = InputContext::new()
            .with_screen(Screen::Login)
            .with_submitting(true);
        assert_eq!(registry.dispatch(plain(KeyCode::Char('a')), &context), None);
        assert_eq!(registry.dispatch(plain(KeyCode::Enter), &context), None);
    }

    #[test]
    fn test_orders_bindings() {
        let registry = CommandRegistry::new();
        let context = InputContext::new().with_screen(Screen::Orders);

        assert_eq!(registry.dispatch(plain(KeyCode::Char('j')), &context), Some(Command::MoveDown));
        assert_eq!(registry.dispatch(plain(KeyCode::Up), &context), Some(Command::MoveUp));
        assert_eq!(registry.dispatch(plain(KeyCode::Enter), &context), Some(Command::OpenSelected));
        assert_eq!(
            registry.dispatch(make_key_event(KeyCode::Char('L'), KeyModifiers::SHIFT), &context),
            Some(Command::Logout)
        );
        assert_eq!(registry.dispatch(plain(KeyCode::Char('x')), &context), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let registry = CommandRegistry::new();
        let mut key = plain(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        let context = InputContext::new().with_screen(Screen::Orders);
        assert_eq!(registry.dispatch(key, &context), None);
    }
}
