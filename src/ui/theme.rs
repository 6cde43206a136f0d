//! Color theme constants for the stockdeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::app::NoticeLevel;
use crate::models::OrderStatus;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the selected row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 45);

/// Background for input fields
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Success state - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error state - red
pub const COLOR_ERROR: Color = Color::Red;

/// Warnings (total mismatch, pending probes) - yellow
pub const COLOR_WARNING: Color = Color::Yellow;

/// Loading spinner - cyan
pub const COLOR_LOADING: Color = Color::Cyan;

// ============================================================================
// Order Status Colors
// ============================================================================

pub fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Confirmed => Color::Cyan,
        OrderStatus::Shipped => Color::Rgb(0, 122, 204),
        OrderStatus::Delivered => COLOR_SUCCESS,
        OrderStatus::Cancelled => COLOR_DIM,
    }
}

pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => COLOR_SUCCESS,
        NoticeLevel::Error => COLOR_ERROR,
    }
}
