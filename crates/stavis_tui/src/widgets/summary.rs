//! Slack summary widget.
//!
//! Shows the headline numbers (total delay, required time, slack with an
//! OK/Violation verdict) followed by the fixed-format path summary block.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::app::TuiApp;
use crate::state::FocusedPanel;

/// Renders the summary panel into the given area.
pub fn render_summary(app: &TuiApp, area: Rect, buf: &mut Buffer) {
    let is_focused = app.state.focused == FocusedPanel::Summary;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let breakdown = &app.breakdown;
    let verdict_style = if breakdown.met() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let status = if breakdown.met() { "OK" } else { "Violation!" };

    let mut lines = vec![
        Line::from(format!(
            "Total delay   : {:.2} ns",
            breakdown.arrival_time_ns
        )),
        Line::from(format!(
            "Required time : {:.2} ns",
            breakdown.required_time_ns
        )),
        Line::from(vec![
            Span::raw(format!("Slack         : {:.2} ns ", breakdown.slack_ns)),
            Span::styled(format!("({status})"), verdict_style),
        ]),
        Line::from(""),
    ];
    for text_line in breakdown.summary().lines() {
        if text_line.starts_with("Slack =") {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                verdict_style,
            )));
        } else {
            lines.push(Line::from(text_line.to_string()));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    Widget::render(paragraph, area, buf);
}
