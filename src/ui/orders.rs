//! Order listing screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::helpers::{format_money, spinner_frame, truncate_to_width};
use super::layout::LayoutContext;
use super::theme::{
    status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING,
    COLOR_SELECTED_BG,
};
use crate::app::App;
use crate::view_model::FetchState;

pub fn render_orders_screen(frame: &mut Frame, area: Rect, app: &App) {
    let list = &app.orders;
    let title = format!(" Orders · {} ", list.filter_label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &list.state {
        FetchState::Loading => {
            let text = format!("{} Loading orders...", spinner_frame(app.tick_count));
            frame.render_widget(
                Paragraph::new(text).style(Style::default().fg(COLOR_LOADING)),
                inner,
            );
        }
        FetchState::Error(message) => {
            let lines = vec![
                Line::from(Span::styled(format!("✗ {}", message), Style::default().fg(COLOR_ERROR))),
                Line::from(""),
                Line::from(Span::styled("[r] Retry", Style::default().fg(COLOR_DIM))),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
        FetchState::Success(orders) if orders.is_empty() => {
            frame.render_widget(
                Paragraph::new("No orders match this filter.").style(Style::default().fg(COLOR_DIM)),
                inner,
            );
        }
        FetchState::Success(orders) => {
            let ctx = LayoutContext::from_rect(inner);
            let wide = !ctx.is_narrow();
            let customer_width = if wide { 24 } else { 16 };

            let mut header = vec!["Order", "Customer", "Status", "Total"];
            let mut widths = vec![
                Constraint::Length(10),
                Constraint::Length(customer_width),
                Constraint::Length(11),
                Constraint::Length(14),
            ];
            if wide {
                header.push("Created");
                widths.push(Constraint::Min(18));
            }

            let rows = orders.iter().map(|order| {
                let mut cells = vec![
                    Cell::from(format!("#{}", order.id)),
                    Cell::from(truncate_to_width(&order.customer_name, customer_width as usize)),
                    Cell::from(Span::styled(
                        order.status.label(),
                        Style::default().fg(status_color(order.status)),
                    )),
                    Cell::from(Line::from(format_money(order.total_amount)).alignment(Alignment::Right)),
                ];
                if wide {
                    cells.push(Cell::from(order.created_at_display()));
                }
                Row::new(cells)
            });

            let table = Table::new(rows, widths)
                .header(
                    Row::new(header)
                        .style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
                )
                .column_spacing(2)
                .row_highlight_style(Style::default().bg(COLOR_SELECTED_BG))
                .highlight_symbol("› ");

            let mut state = TableState::default().with_selected(Some(list.selected));
            frame.render_stateful_widget(table, inner, &mut state);
        }
    }
}
