//! Terminal front end for the stavis timing visualizer.
//!
//! Provides a ratatui-based TUI around the timing engine: clock waveform
//! traces with a data-arrival marker, the per-stage path report, and the
//! slack summary, driven by single-key events.
//!
//! # Usage
//!
//! ```ignore
//! use stavis_timing::{PathConstants, WaveformWindow};
//! use stavis_tui::run_tui;
//!
//! run_tui(PathConstants::default(), WaveformWindow::default())?;
//! ```
//!
//! # Layout
//!
//! - **Clocks** (top) — capture and launch traces, arrival/setup markers
//! - **Path Report** (bottom left) — per-stage delay table
//! - **Summary** (bottom right) — slack equation and verdict
//! - **Status Bar** — buffer count, setup-check state, last action

#![warn(missing_docs)]

pub mod app;
pub mod event;
pub mod render;
pub mod state;
pub mod terminal;
pub mod widgets;

use std::time::Duration;

use crossterm::event::KeyEventKind;
use stavis_timing::{PathConstants, WaveformWindow};

use app::TuiApp;
use event::{poll_event, TuiEvent};
use terminal::{init_terminal, install_panic_hook, restore_terminal, Tui};

/// Errors from terminal setup, rendering, or event polling.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal I/O failed.
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the interactive visualizer until the user quits.
///
/// Sets up the terminal, creates a [`TuiApp`] with an empty path, and runs
/// the main event loop. Restores the terminal on exit, including on panic
/// via the installed hook.
///
/// # Errors
///
/// Returns [`TuiError`] on terminal I/O failure.
pub fn run_tui(constants: PathConstants, window: WaveformWindow) -> Result<(), TuiError> {
    install_panic_hook();
    let mut terminal = init_terminal()?;

    let mut app = TuiApp::new(constants, window);
    let result = run_tui_loop(&mut app, &mut terminal);

    restore_terminal()?;
    result
}

/// The draw/poll event loop.
fn run_tui_loop(app: &mut TuiApp, terminal: &mut Tui) -> Result<(), TuiError> {
    let tick_rate = Duration::from_millis(50);

    loop {
        terminal.draw(|frame| render::render(app, frame))?;

        match poll_event(tick_rate)? {
            TuiEvent::Key(key) => {
                if key.kind != KeyEventKind::Release {
                    app.handle_key(key.code);
                }
            }
            TuiEvent::Tick => {}
            TuiEvent::Resize(_, _) => {
                // Handled automatically by ratatui on the next draw.
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
