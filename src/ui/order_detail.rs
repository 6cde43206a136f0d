//! Order detail screen: header fields, the line table and the totals.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use super::helpers::{format_money, spinner_frame, truncate_to_width};
use super::theme::{
    status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_WARNING,
};
use crate::app::App;
use crate::view_model::{FetchState, OrderDetailData};

pub fn render_order_detail_screen(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.detail.order_id() {
        Some(id) => format!(" Order #{} ", id),
        None => " Order ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.detail.state {
        FetchState::Loading => {
            let text = format!("{} Loading order...", spinner_frame(app.tick_count));
            frame.render_widget(
                Paragraph::new(text).style(Style::default().fg(COLOR_LOADING)),
                inner,
            );
        }
        FetchState::Error(message) => {
            frame.render_widget(
                Paragraph::new(format!("✗ {}", message)).style(Style::default().fg(COLOR_ERROR)),
                inner,
            );
        }
        FetchState::Success(data) => render_loaded(frame, inner, data),
    }
}

fn render_loaded(frame: &mut Frame, area: Rect, data: &OrderDetailData) {
    let summary_height = if data.total_mismatch() { 3 } else { 2 };
    let [info_area, table_area, summary_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Length(summary_height),
    ])
    .areas(area);

    let order = &data.order;
    let label = Style::default().fg(COLOR_DIM);
    let info = vec![
        Line::from(vec![
            Span::styled("Customer  ", label),
            Span::raw(order.customer_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Status    ", label),
            Span::styled(order.status.label(), Style::default().fg(status_color(order.status))),
        ]),
        Line::from(vec![
            Span::styled("Created   ", label),
            Span::raw(order.created_at_display()),
        ]),
    ];
    frame.render_widget(Paragraph::new(info), info_area);

    if data.lines.is_empty() {
        frame.render_widget(
            Paragraph::new("This order has no lines.").style(label),
            table_area,
        );
    } else {
        let name_width = table_area.width.saturating_sub(44).max(12);
        let rows = data.lines.iter().map(|line| {
            Row::new(vec![
                Cell::from(truncate_to_width(&line.product_name, name_width as usize)),
                Cell::from(line.product_sku.clone()),
                Cell::from(Line::from(line.quantity.to_string()).alignment(Alignment::Right)),
                Cell::from(Line::from(format_money(line.unit_price)).alignment(Alignment::Right)),
                Cell::from(Line::from(format_money(line.line_total)).alignment(Alignment::Right)),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Min(name_width),
                Constraint::Length(10),
                Constraint::Length(5),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(
            Row::new(vec!["Product", "SKU", "Qty", "Unit price", "Line total"])
                .style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        )
        .column_spacing(1);
        frame.render_widget(table, table_area);
    }

    let mut summary = vec![Line::from(vec![
        Span::styled("Total  ", label),
        Span::styled(
            format_money(order.total_amount),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("   {} items", order.item_count()), label),
    ])];
    if data.total_mismatch() {
        summary.push(Line::from(Span::styled(
            format!("⚠ Lines add up to {}", format_money(data.lines_total())),
            Style::default().fg(COLOR_WARNING),
        )));
    }
    summary.push(Line::from(Span::styled(
        "[Esc] Back  [ / ] Previous / next order  [r] Reload",
        label,
    )));
    frame.render_widget(Paragraph::new(summary), summary_area);
}
