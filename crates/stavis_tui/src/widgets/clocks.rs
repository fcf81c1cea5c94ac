//! Clock waveform widget.
//!
//! Draws the capture and launch clock traces as two-row box-drawing
//! waveforms, with a data-arrival marker colored by the slack verdict and,
//! when the setup check is on, a dashed setup-window marker at the
//! required time.
//!
//! ```text
//!   0        5ns       10ns
//!   ────┐    ┌────┐    ┌──     (top row: high level)
//!       └────┘    └────┘       (bottom row: low level)
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Widget};

use crate::app::TuiApp;
use crate::state::FocusedPanel;

/// Width of the trace-name gutter on the left of the panel.
const NAME_WIDTH: u16 = 9;

/// Renders the clocks panel: time ruler, both traces, and the markers.
pub fn render_clocks(app: &TuiApp, area: Rect, buf: &mut Buffer) {
    let is_focused = app.state.focused == FocusedPanel::Clocks;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Clocks ")
        .borders(Borders::ALL)
        .border_style(border_style);
    Widget::render(block, area, buf);

    // Inner rows: ruler, capture (2), gap, launch (2), arrival label.
    if area.width < NAME_WIDTH + 6 || area.height < 9 {
        return;
    }
    let inner = Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2);
    let trace = Rect::new(
        inner.x + NAME_WIDTH,
        inner.y,
        inner.width - NAME_WIDTH,
        inner.height,
    );

    render_time_ruler(app, trace, buf);

    let trace_right = trace.x + trace.width;
    draw_text(
        buf,
        inner.x,
        inner.y + 1,
        "capture",
        Style::default(),
        inner.x + NAME_WIDTH,
    );
    render_trace(
        &app.waveforms.capture_levels,
        trace.x,
        trace.y + 1,
        trace.width,
        buf,
    );
    draw_text(
        buf,
        inner.x,
        inner.y + 4,
        "launch",
        Style::default(),
        inner.x + NAME_WIDTH,
    );
    render_trace(
        &app.waveforms.launch_levels,
        trace.x,
        trace.y + 4,
        trace.width,
        buf,
    );

    let end_ns = app.waveforms.end_ns();

    // Setup-window marker at the required time, only while the check is on.
    if app.path.setup_check() {
        render_marker(
            app.breakdown.required_time_ns,
            end_ns,
            '\u{250A}', // ┊
            Style::default().fg(Color::Yellow),
            trace,
            buf,
        );
    }

    // Data-arrival marker, colored by the verdict.
    let arrival_style = if app.breakdown.met() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    render_marker(
        app.breakdown.arrival_time_ns,
        end_ns,
        '\u{2502}', // │
        arrival_style,
        trace,
        buf,
    );

    // Arrival label near the marker, clamped so it stays inside the panel.
    let label = format!("delay = {:.2} ns", app.breakdown.arrival_time_ns);
    if let Some(col) = time_to_col(app.breakdown.arrival_time_ns, end_ns, trace.width) {
        let max_start = trace.width.saturating_sub(label.len() as u16);
        let x = trace.x + col.min(max_start);
        draw_text(buf, x, trace.y + 6, &label, arrival_style, trace_right);
    }
}

/// Draws period-boundary tick labels along the top of the trace area.
fn render_time_ruler(app: &TuiApp, trace: Rect, buf: &mut Buffer) {
    let end_ns = app.waveforms.end_ns();
    let period = app.constants.clock_period_ns;
    if end_ns <= 0.0 || period <= 0.0 {
        return;
    }

    let style = Style::default().fg(Color::DarkGray);
    let mut k = 0u32;
    loop {
        let t = f64::from(k) * period;
        if t > end_ns {
            break;
        }
        let col = match time_to_col(t, end_ns, trace.width) {
            Some(col) => col,
            None => break,
        };
        let label = if k == 0 {
            "0".to_string()
        } else {
            format!("{t:.0}ns")
        };
        draw_text(buf, trace.x + col, trace.y, &label, style, trace.x + trace.width);
        k += 1;
    }
}

/// Draws a two-row clock trace from sampled levels.
///
/// The top row carries the high-level line, the bottom row the low-level
/// line; transitions connect the rows with corner characters.
fn render_trace(levels: &[u8], x_start: u16, top_row: u16, width: u16, buf: &mut Buffer) {
    if levels.is_empty() || width == 0 {
        return;
    }
    let style = Style::default().fg(Color::Green);
    let bot_row = top_row + 1;
    let mut prev: Option<u8> = None;

    for col in 0..width {
        let x = x_start + col;
        if x >= buf.area().right() || bot_row >= buf.area().bottom() {
            break;
        }
        let level = levels[sample_index(col, width, levels.len())];
        let is_transition = prev.is_some_and(|p| p != level);

        match (level, is_transition) {
            (1, true) => {
                buf.get_mut(x, top_row).set_char('\u{250C}').set_style(style); // ┌
                buf.get_mut(x, bot_row).set_char('\u{2518}').set_style(style); // ┘
            }
            (0, true) => {
                buf.get_mut(x, top_row).set_char('\u{2510}').set_style(style); // ┐
                buf.get_mut(x, bot_row).set_char('\u{2514}').set_style(style); // └
            }
            (1, false) => {
                buf.get_mut(x, top_row).set_char('\u{2500}').set_style(style); // ─
            }
            _ => {
                buf.get_mut(x, bot_row).set_char('\u{2500}').set_style(style); // ─
            }
        }
        prev = Some(level);
    }
}

/// Draws a vertical marker across both traces at the given time.
///
/// Blank cells get the marker character; cells already carrying trace
/// chrome are only recolored so the trace stays legible underneath.
fn render_marker(time_ns: f64, end_ns: f64, ch: char, style: Style, trace: Rect, buf: &mut Buffer) {
    let col = match time_to_col(time_ns, end_ns, trace.width) {
        Some(col) => col,
        None => return,
    };
    let x = trace.x + col;
    for y in trace.y + 1..trace.y + 6 {
        if x < buf.area().right() && y < buf.area().bottom() {
            let cell = buf.get_mut(x, y);
            if cell.symbol() == " " {
                cell.set_char(ch);
            }
            cell.set_style(style);
        }
    }
}

/// Maps a trace column to the nearest waveform sample index.
fn sample_index(col: u16, width: u16, samples: usize) -> usize {
    if width <= 1 || samples <= 1 {
        return 0;
    }
    let frac = f64::from(col) / f64::from(width - 1);
    ((frac * (samples - 1) as f64).round() as usize).min(samples - 1)
}

/// Maps a time to a trace column, clamping times past the window end to
/// the last column. Returns `None` for negative times or an empty window.
fn time_to_col(time_ns: f64, end_ns: f64, width: u16) -> Option<u16> {
    if time_ns < 0.0 || end_ns <= 0.0 || width == 0 {
        return None;
    }
    let col = (time_ns / end_ns * f64::from(width - 1)).round() as u16;
    Some(col.min(width - 1))
}

/// Writes a string into the buffer, clipped to `clip_right` and the
/// buffer area so text never bleeds into the panel border.
fn draw_text(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, clip_right: u16) {
    if y >= buf.area().bottom() {
        return;
    }
    for (j, ch) in text.chars().enumerate() {
        let px = x + j as u16;
        if px >= clip_right || px >= buf.area().right() {
            break;
        }
        buf.get_mut(px, y).set_char(ch).set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use stavis_timing::{PathConstants, WaveformWindow};

    fn make_app() -> TuiApp {
        TuiApp::new(PathConstants::default(), WaveformWindow::default())
    }

    fn buffer_row(buf: &Buffer, y: u16) -> String {
        (buf.area().left()..buf.area().right())
            .map(|x| buf.get(x, y).symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn render_clocks_does_not_panic() {
        let app = make_app();
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        render_clocks(&app, area, &mut buf);
    }

    #[test]
    fn render_clocks_small_area_is_safe() {
        let app = make_app();
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        render_clocks(&app, area, &mut buf);
    }

    #[test]
    fn trace_names_appear() {
        let app = make_app();
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        render_clocks(&app, area, &mut buf);
        assert!(buffer_row(&buf, 2).contains("capture"));
        assert!(buffer_row(&buf, 5).contains("launch"));
    }

    #[test]
    fn arrival_label_rendered() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('1'));
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        render_clocks(&app, area, &mut buf);
        assert!(buffer_row(&buf, 7).contains("delay = 0.50 ns"));
    }

    #[test]
    fn sample_index_spans_the_window() {
        assert_eq!(sample_index(0, 70, 101), 0);
        assert_eq!(sample_index(69, 70, 101), 100);
        // A middle column maps to a middle sample.
        let mid = sample_index(35, 70, 101);
        assert!(mid > 40 && mid < 60);
    }

    #[test]
    fn time_to_col_endpoints() {
        assert_eq!(time_to_col(0.0, 10.0, 71), Some(0));
        assert_eq!(time_to_col(10.0, 10.0, 71), Some(70));
        assert_eq!(time_to_col(5.0, 10.0, 71), Some(35));
    }

    #[test]
    fn time_to_col_clamps_past_window() {
        assert_eq!(time_to_col(25.0, 10.0, 71), Some(70));
    }

    #[test]
    fn time_to_col_rejects_negative_and_empty() {
        assert_eq!(time_to_col(-1.0, 10.0, 71), None);
        assert_eq!(time_to_col(1.0, 0.0, 71), None);
        assert_eq!(time_to_col(1.0, 10.0, 0), None);
    }

    #[test]
    fn trace_has_transitions() {
        let levels = vec![1, 1, 0, 0, 1];
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        render_trace(&levels, 0, 0, 5, &mut buf);
        let top = buffer_row(&buf, 0);
        let bottom = buffer_row(&buf, 1);
        assert!(top.contains('\u{2500}'));
        assert!(top.contains('\u{2510}'));
        assert!(bottom.contains('\u{2514}'));
    }
}
