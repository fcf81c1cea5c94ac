//! Path report table widget.
//!
//! Renders the per-stage delay breakdown as a three-column table:
//! instance, incremental delay, and cumulative delay, rounded to two
//! decimals for display. LVT rows are red and HVT rows green so the
//! variant mix is visible at a glance.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};
use stavis_timing::{BufferVariant, StageKind};

use crate::app::TuiApp;
use crate::state::FocusedPanel;

/// Renders the path report table into the given area.
pub fn render_report_table(app: &TuiApp, area: Rect, buf: &mut Buffer) {
    let is_focused = app.state.focused == FocusedPanel::Report;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Path Report ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let header = Row::new(vec!["Instance", "Incr (ns)", "Total (ns)"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .breakdown
        .stages
        .iter()
        .map(|stage| {
            let style = match stage.kind {
                StageKind::Buffer(BufferVariant::LowThreshold) => {
                    Style::default().fg(Color::Red)
                }
                StageKind::Buffer(BufferVariant::HighThreshold) => {
                    Style::default().fg(Color::Green)
                }
                _ => Style::default(),
            };
            Row::new(vec![
                Cell::from(stage.label.clone()),
                Cell::from(format!("{:.2}", stage.incremental_ns)),
                Cell::from(format!("{:.2}", stage.cumulative_ns)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);

    Widget::render(table, area, buf);
}
