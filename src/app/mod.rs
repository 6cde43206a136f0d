//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Notice`] - Transient status message
//! - [`AppMessage`] - Messages for async communication
//!
//! Background work (requests, the probe battery) runs in spawned tasks that
//! report back through the [`AppMessage`] channel; all state lives here and
//! is only touched from the UI loop.

mod handlers;
mod keys;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Notice, NoticeLevel, Screen, NOTICE_TICKS};

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::input::CommandRegistry;
use crate::session::SessionStore;
use crate::ui::logo::Logo;
use crate::view_model::{DebugPanel, LoginForm, OrderDetail, OrderList, ViewLifetime};

/// Ticks between spinner frames while something is loading.
const SPINNER_TICK_INTERVAL: u64 = 6;

/// Main application state
pub struct App {
    /// Currently displayed screen
    pub screen: Screen,
    /// Login form (replaced on every keystroke)
    pub login: LoginForm,
    pub orders: OrderList,
    pub detail: OrderDetail,
    pub debug: DebugPanel,
    /// Status-bar notice, cleared when it expires
    pub notice: Option<Notice>,
    /// Brand mark shown on the login screen and header
    pub logo: Logo,
    api: ApiClient,
    /// Lifetime of the in-flight login request
    login_lifetime: ViewLifetime,
    /// Key bindings
    commands: CommandRegistry,
    /// Sender for async messages
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for async messages; taken by the run loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: the next loop iteration redraws
    pub needs_redraw: bool,
    /// Tick counter for animations and notice expiry
    pub tick_count: u64,
}

impl App {
    pub fn new(api: ApiClient, logo: Logo) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::default(),
            login: LoginForm::new(),
            orders: OrderList::new(),
            detail: OrderDetail::new(),
            debug: DebugPanel::new(),
            notice: None,
            logo,
            api,
            login_lifetime: ViewLifetime::new(),
            commands: CommandRegistry::new(),
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.api.session()
    }

    /// Name of the signed-in user, if any.
    pub fn user_label(&self) -> Option<String> {
        self.session().current().map(|s| s.user.display_name())
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Stop the loop and cancel everything in flight.
    pub fn quit(&mut self) {
        self.login_lifetime.deactivate();
        self.orders.deactivate();
        self.detail.deactivate();
        self.debug.deactivate();
        self.should_quit = true;
    }

    /// Whether the current screen shows a spinner.
    pub fn is_busy(&self) -> bool {
        match self.screen {
            Screen::Login => self.login.submitting,
            Screen::Orders => self.orders.state.is_loading(),
            Screen::OrderDetail => self.detail.state.is_loading(),
            Screen::Debug => self.debug.running,
        }
    }

    /// Advance the tick counter, expire notices and animate spinners.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.is_expired(self.tick_count))
        {
            self.notice = None;
            self.mark_dirty();
        }

        if self.is_busy() && self.tick_count % SPINNER_TICK_INTERVAL == 0 {
            self.mark_dirty();
        }
    }

    pub fn show_notice(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice {
            text: text.into(),
            level,
            expires_at: self.tick_count.wrapping_add(NOTICE_TICKS),
        });
        self.mark_dirty();
    }

    /// Spawn a background task whose result arrives as an [`AppMessage`].
    fn spawn_task<F>(&self, task: F)
    where
        F: Future<Output = Option<AppMessage>> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            if let Some(message) = task.await {
                // The receiver is gone only when the app is shutting down.
                let _ = tx.send(message);
            }
        });
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notice", &self.notice)
            .field("tick_count", &self.tick_count)
            .finish_non_exhaustive()
    }
}
