use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::{centered_rect, spinner_frame};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG, COLOR_LOADING};
use crate::app::App;
use crate::view_model::{LoginField, LoginForm};

const DIALOG_HEIGHT: u16 = 12;

pub fn render_login_screen(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = LayoutContext::from_rect(area);
    let form = &app.login;

    let dialog_width = ctx.bounded_width(50, 36, 60);
    let logo_height = if ctx.fits_logo(app.logo.height()) {
        app.logo.height() + 1
    } else {
        0
    };
    let block_area = centered_rect(dialog_width, DIALOG_HEIGHT + logo_height, area);

    if logo_height > 0 {
        let logo_area = Rect::new(block_area.x, block_area.y, block_area.width, logo_height - 1);
        let logo = Paragraph::new(app.logo.lines().to_vec()).alignment(Alignment::Center);
        frame.render_widget(logo, logo_area);
    }

    let dialog_area = Rect::new(
        block_area.x,
        block_area.y + logo_height,
        block_area.width,
        block_area.height.saturating_sub(logo_height),
    );
    let dialog_block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = dialog_block.inner(dialog_area);
    frame.render_widget(dialog_block, dialog_area);

    let rows = Layout::vertical([
        Constraint::Length(1), // email label
        Constraint::Length(1), // email input
        Constraint::Length(1),
        Constraint::Length(1), // password label
        Constraint::Length(1), // password input
        Constraint::Length(1),
        Constraint::Min(1), // status
    ])
    .split(inner.inner(Margin::new(1, 0)));

    frame.render_widget(field_label("Email", form.focus == LoginField::Email), rows[0]);
    frame.render_widget(field_input(form.email.clone(), form.focus == LoginField::Email), rows[1]);
    frame.render_widget(
        field_label("Password", form.focus == LoginField::Password),
        rows[3],
    );
    frame.render_widget(
        field_input(form.masked_password(), form.focus == LoginField::Password),
        rows[4],
    );
    frame.render_widget(status_paragraph(form, app.tick_count), rows[6]);
}

fn field_label(label: &'static str, focused: bool) -> Paragraph<'static> {
    let style = if focused {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    Paragraph::new(Span::styled(label, style))
}

fn field_input(value: String, focused: bool) -> Paragraph<'static> {
    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
    }
    Paragraph::new(Line::from(spans)).style(Style::default().bg(COLOR_INPUT_BG))
}

fn status_paragraph(form: &LoginForm, tick: u64) -> Paragraph<'static> {
    let line = if form.submitting {
        Line::from(Span::styled(
            format!("{} Signing in...", spinner_frame(tick)),
            Style::default().fg(COLOR_LOADING),
        ))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(format!("✗ {}", error), Style::default().fg(COLOR_ERROR)))
    } else {
        Line::from(Span::styled(
            "[Enter] Sign in  [Tab] Next field  [Esc] Quit",
            Style::default().fg(COLOR_DIM),
        ))
    };
    Paragraph::new(line).wrap(Wrap { trim: true })
}
