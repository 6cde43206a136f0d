//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Notice`] - Transient message shown in the status bar

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Login,
    Orders,
    OrderDetail,
    Debug,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign in",
            Screen::Orders => "Orders",
            Screen::OrderDetail => "Order detail",
            Screen::Debug => "API probes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Ticks a notice stays visible (16ms ticks, about four seconds).
pub const NOTICE_TICKS: u64 = 250;

/// Transient status-bar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    /// Tick at which the notice disappears
    pub expires_at: u64,
}

impl Notice {
    pub fn is_expired(&self, tick: u64) -> bool {
        tick >= self.expires_at
    }
}
