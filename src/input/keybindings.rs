//! Default keybindings for the application.
//!
//! Maps key combinations to commands per screen. The login form's free text
//! input is handled by the registry, not by this table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::Screen;
use crate::view_model::FormInput;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Combo for a key event. Shift is dropped for characters, which
    /// already carry their case, and for BackTab.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per screen
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            screen: HashMap::new(),
        };

        config
            .global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        config.setup_login_bindings();
        config.setup_orders_bindings();
        config.setup_detail_bindings();
        config.setup_debug_bindings();

        config
    }

    fn bind(&mut self, screen: Screen, combos: &[KeyCombo], command: Command) {
        let bindings = self.screen.entry(screen).or_default();
        for combo in combos {
            bindings.insert(*combo, command);
        }
    }

    fn setup_login_bindings(&mut self) {
        use KeyCode::*;
        let s = Screen::Login;
        self.bind(s, &[KeyCombo::plain(Esc)], Command::Quit);
        self.bind(
            s,
            &[KeyCombo::plain(Tab), KeyCombo::plain(Down)],
            Command::LoginInput(FormInput::NextField),
        );
        self.bind(
            s,
            &[KeyCombo::plain(BackTab), KeyCombo::plain(Up)],
            Command::LoginInput(FormInput::PrevField),
        );
        self.bind(
            s,
            &[KeyCombo::plain(Backspace)],
            Command::LoginInput(FormInput::Backspace),
        );
        self.bind(
            s,
            &[KeyCombo::ctrl(Char('u'))],
            Command::LoginInput(FormInput::ClearField),
        );
        self.bind(s, &[KeyCombo::plain(Enter)], Command::SubmitLogin);
    }

    fn setup_orders_bindings(&mut self) {
        use KeyCode::*;
        let s = Screen::Orders;
        self.bind(s, &[KeyCombo::plain(Char('q'))], Command::Quit);
        self.bind(s, &[KeyCombo::plain(Up), KeyCombo::plain(Char('k'))], Command::MoveUp);
        self.bind(s, &[KeyCombo::plain(Down), KeyCombo::plain(Char('j'))], Command::MoveDown);
        self.bind(s, &[KeyCombo::plain(Enter)], Command::OpenSelected);
        self.bind(s, &[KeyCombo::plain(Char('f'))], Command::CycleFilter);
        self.bind(s, &[KeyCombo::plain(Char('r'))], Command::Reload);
        self.bind(s, &[KeyCombo::plain(Char('d'))], Command::OpenDebug);
        self.bind(s, &[KeyCombo::plain(Char('L'))], Command::Logout);
    }

    fn setup_detail_bindings(&mut self) {
        use KeyCode::*;
        let s = Screen::OrderDetail;
        self.bind(
            s,
            &[
                KeyCombo::plain(Esc),
                KeyCombo::plain(Char('q')),
                KeyCombo::plain(Backspace),
                KeyCombo::plain(Left),
            ],
            Command::Back,
        );
        self.bind(s, &[KeyCombo::plain(Char('['))], Command::PrevOrder);
        self.bind(s, &[KeyCombo::plain(Char(']'))], Command::NextOrder);
        self.bind(s, &[KeyCombo::plain(Char('r'))], Command::Reload);
    }

    fn setup_debug_bindings(&mut self) {
        use KeyCode::*;
        let s = Screen::Debug;
        self.bind(s, &[KeyCombo::plain(Esc), KeyCombo::plain(Char('q'))], Command::Back);
        self.bind(s, &[KeyCombo::plain(Char('r'))], Command::Reload);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|m| m.get(combo))
    }
}
