//! Status bar widget.
//!
//! Renders a single-line status bar showing the buffer count, the
//! setup-check state, the current slack with its verdict, and the message
//! from the last handled event.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::app::TuiApp;

/// Renders the status bar into the given area.
pub fn render_status_bar(app: &TuiApp, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let verdict_style = if app.breakdown.met() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };

    let setup = if app.path.setup_check() { "on" } else { "off" };
    let status_msg = if app.state.status_message.is_empty() {
        String::new()
    } else {
        format!(" | {}", app.state.status_message)
    };

    let line = Line::from(vec![
        Span::styled(
            " STAVIS ",
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} buffer(s)", app.path.len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" | setup check {setup}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(
                " | slack {:.2} ns {}",
                app.breakdown.slack_ns,
                app.breakdown.verdict()
            ),
            verdict_style,
        ),
        Span::styled(status_msg, Style::default().fg(Color::Cyan)),
    ]);

    // Fill the whole line so the bar reads as one strip.
    let bg_style = Style::default().bg(Color::DarkGray);
    for x in area.x..area.x + area.width {
        if x < buf.area().right() {
            buf.get_mut(x, area.y).set_style(bg_style);
        }
    }

    Widget::render(line, area, buf);
}
