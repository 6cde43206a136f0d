//! API probe panel.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use super::helpers::{spinner_frame, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_SUCCESS};
use crate::app::App;
use crate::view_model::{ProbeResult, PROBES};

pub fn render_debug_screen(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.debug;
    let block = Block::default()
        .title(" API probes ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [table_area, summary_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(inner);

    let detail_width = table_area.width.saturating_sub(48).max(10) as usize;
    let mut rows: Vec<Row> = panel
        .results
        .iter()
        .map(|result| result_row(result, detail_width))
        .collect();

    // Probes still waiting in this run
    let spinner = spinner_frame(app.tick_count);
    for (i, probe) in PROBES.iter().enumerate().skip(panel.results.len()) {
        if !panel.running {
            break;
        }
        let marker = if i == panel.results.len() { spinner } else { "·" };
        rows.push(
            Row::new(vec![
                Cell::from(marker),
                Cell::from(probe.name),
                Cell::from(probe.path),
                Cell::from(""),
                Cell::from(""),
                Cell::from(""),
            ])
            .style(Style::default().fg(COLOR_DIM)),
        );
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(17),
            Constraint::Length(16),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["", "Probe", "Path", "Status", "Time", "Result"])
            .style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
    )
    .column_spacing(1);
    frame.render_widget(table, table_area);

    let summary = match &panel.summary {
        Some(summary) => {
            let color = if summary.all_passed() {
                COLOR_SUCCESS
            } else {
                COLOR_ERROR
            };
            Line::from(vec![
                Span::styled(
                    format!("{} passed, {} failed", summary.passed, summary.failed),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" of {}", summary.total()), Style::default().fg(COLOR_DIM)),
            ])
        }
        None if panel.running => Line::from(Span::styled(
            format!("Running... {} pending", panel.pending()),
            Style::default().fg(COLOR_LOADING),
        )),
        None => Line::from(""),
    };
    let help = Line::from(Span::styled(
        "[r] Run again  [Esc] Back",
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(vec![summary, help]), summary_area);
}

fn result_row(result: &ProbeResult, detail_width: usize) -> Row<'static> {
    let (marker, color) = if result.success {
        ("✓", COLOR_SUCCESS)
    } else {
        ("✗", COLOR_ERROR)
    };
    let status = result
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    let detail = match (&result.shape, &result.error) {
        (_, Some(error)) if !result.success => error.clone(),
        (Some(shape), _) => shape.to_string(),
        (None, _) => String::new(),
    };

    Row::new(vec![
        Cell::from(Span::styled(marker, Style::default().fg(color))),
        Cell::from(result.name.clone()),
        Cell::from(result.path.clone()),
        Cell::from(Span::styled(status, Style::default().fg(color))),
        Cell::from(format!("{}ms", result.elapsed_ms)),
        Cell::from(truncate_to_width(&detail, detail_width)),
    ])
}
