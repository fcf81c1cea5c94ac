//! Top-level rendering logic.
//!
//! Assembles the TUI layout by splitting the terminal into panels and
//! delegating to the individual widget modules.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{help_text, TuiApp};
use crate::widgets::{clocks, report_table, status_bar, summary};

/// Renders the complete TUI layout into the given frame.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────┐
/// │ Clocks                              │
/// ├───────────────────┬─────────────────┤
/// │ Path Report       │ Summary         │
/// ├───────────────────┴─────────────────┤
/// │ Status Bar                          │
/// └─────────────────────────────────────┘
/// ```
pub fn render(app: &TuiApp, frame: &mut Frame) {
    let size = frame.size();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // clocks
            Constraint::Min(6),     // report + summary
            Constraint::Length(1),  // status bar
        ])
        .split(size);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // report table
            Constraint::Percentage(45), // summary
        ])
        .split(vertical[1]);

    clocks::render_clocks(app, vertical[0], frame.buffer_mut());
    report_table::render_report_table(app, horizontal[0], frame.buffer_mut());
    summary::render_summary(app, horizontal[1], frame.buffer_mut());
    status_bar::render_status_bar(app, vertical[2], frame.buffer_mut());

    if app.state.show_help {
        render_help_popup(frame);
    }
}

/// Renders a centered help popup over the main layout.
fn render_help_popup(frame: &mut Frame) {
    use ratatui::style::{Color, Style};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let area = frame.size();
    let popup_width = 46u16.min(area.width.saturating_sub(4));
    let popup_height = 16u16.min(area.height.saturating_sub(4));
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = ratatui::layout::Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(help_text())
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    frame.render_widget(popup, popup_area);
}
