//! UI rendering for stockdeck
//!
//! Pure rendering of [`App`] state into a ratatui frame:
//! - Header with the current screen and signed-in user
//! - One body per [`Screen`]
//! - Status bar with the current notice or key hints
//!
//! Nothing here mutates state or talks to the network.

mod debug_panel;
mod helpers;
pub mod layout;
mod login;
pub mod logo;
mod order_detail;
mod orders;
pub mod theme;

pub use helpers::{format_money, truncate_to_width};
pub use layout::LayoutContext;
pub use logo::Logo;

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::app::{App, Screen};
use debug_panel::render_debug_screen;
use login::render_login_screen;
use order_detail::render_order_detail_screen;
use orders::render_orders_screen;
use theme::{notice_color, COLOR_DIM, COLOR_HEADER};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area, app);
    match app.screen {
        Screen::Login => render_login_screen(frame, body_area, app),
        Screen::Orders => render_orders_screen(frame, body_area, app),
        Screen::OrderDetail => render_order_detail_screen(frame, body_area, app),
        Screen::Debug => render_debug_screen(frame, body_area, app),
    }
    render_status_bar(frame, status_area, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let left = Line::from(vec![
        Span::styled(
            " stockdeck ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}", app.screen.title()), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(left), area);

    if let Some(user) = app.user_label() {
        let right = Paragraph::new(Span::styled(format!("{} ", user), Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Right);
        frame.render_widget(right, area);
    }
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => " [Enter] Sign in  [Esc] Quit",
        Screen::Orders => " [↑↓] Move  [Enter] Open  [f] Filter  [r] Refresh  [d] Probes  [L] Sign out  [q] Quit",
        Screen::OrderDetail => " [Esc] Back  [ / ] Prev / next  [r] Reload",
        Screen::Debug => " [r] Run again  [Esc] Back",
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.notice {
        Some(notice) => Line::from(Span::styled(
            format!(" {}", notice.text),
            Style::default().fg(notice_color(notice.level)),
        )),
        None => Line::from(Span::styled(key_hints(app.screen), Style::default().fg(COLOR_DIM))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
