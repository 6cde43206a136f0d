//! Keyboard handling for the App.

use crossterm::event::KeyEvent;

use super::{App, Screen};
use crate::input::{Command, InputContext};

impl App {
    /// Translate a key press into a command and run it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = InputContext::from_app(self);
        if let Some(command) = self.commands.dispatch(key, &context) {
            self.execute_command(command);
        }
    }

    pub fn execute_command(&mut self, command: Command) {
        self.mark_dirty();
        match command {
            Command::Quit => self.quit(),
            Command::Back => self.go_back(),
            Command::LoginInput(input) => {
                self.login = std::mem::take(&mut self.login).apply(input);
            }
            Command::SubmitLogin => self.submit_login(),
            Command::MoveUp => self.orders.select_prev(),
            Command::MoveDown => self.orders.select_next(),
            Command::OpenSelected => self.open_selected_order(),
            Command::CycleFilter => self.cycle_order_filter(),
            Command::OpenDebug => self.open_debug(),
            Command::Logout => self.logout(),
            Command::PrevOrder => self.open_adjacent_order(-1),
            Command::NextOrder => self.open_adjacent_order(1),
            Command::Reload => match self.screen {
                Screen::Orders => self.reload_orders(),
                Screen::OrderDetail => self.reload_order(),
                Screen::Debug if !self.debug.running => self.run_probes(),
                Screen::Debug | Screen::Login => {}
            },
        }
    }
}
