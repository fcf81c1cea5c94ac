//! TUI application core.
//!
//! [`TuiApp`] owns the data path, the model constants, and the derived
//! outputs. Every user event mutates the path and immediately recomputes
//! the full breakdown, so a draw never observes stale state. The clock
//! waveforms are independent of the path and computed once per session.

use crossterm::event::KeyCode;
use stavis_timing::{
    analyze, BufferVariant, ClockWaveforms, DataPath, DelayCatalog, PathConstants, PathEvent,
    TimingBreakdown, WaveformWindow,
};

use crate::state::TuiState;

/// The core TUI application state.
pub struct TuiApp {
    /// Model constants, fixed for the lifetime of the session.
    pub constants: PathConstants,
    /// Buffer delay lookup derived from the constants.
    pub catalog: DelayCatalog,
    /// The mutable path state.
    pub path: DataPath,
    /// Breakdown recomputed after every event.
    pub breakdown: TimingBreakdown,
    /// Clock traces over the display window.
    pub waveforms: ClockWaveforms,
    /// Presentation state.
    pub state: TuiState,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Creates the application with an empty path.
    pub fn new(constants: PathConstants, window: WaveformWindow) -> Self {
        let catalog = DelayCatalog::from_constants(&constants);
        let path = DataPath::new();
        let breakdown = analyze(&path, &constants);
        let waveforms = ClockWaveforms::generate(
            &window,
            constants.clock_period_ns,
            constants.launch_clock_delay_ns,
        );
        Self {
            constants,
            catalog,
            path,
            breakdown,
            waveforms,
            state: TuiState::new(),
            should_quit: false,
        }
    }

    /// Applies a path event, recomputes the breakdown, and records a
    /// status message describing what happened.
    pub fn apply(&mut self, event: PathEvent) {
        let len_before = self.path.len();
        self.path.apply(&self.catalog, event);
        self.breakdown = analyze(&self.path, &self.constants);

        self.state.status_message = match event {
            PathEvent::AddBuffer(variant) => format!(
                "added {} buffer ({} in path)",
                variant.display_name(),
                self.path.len()
            ),
            PathEvent::RemoveLast if len_before == 0 => "path is already empty".to_string(),
            PathEvent::RemoveLast => format!("removed last buffer ({} left)", self.path.len()),
            PathEvent::Reset => "reset to initial state".to_string(),
            PathEvent::SetSetupCheck(true) => format!(
                "setup check on ({:.1} ns penalty)",
                self.constants.setup_time_penalty_ns
            ),
            PathEvent::SetSetupCheck(false) => "setup check off".to_string(),
        };
    }

    /// Handles a key press.
    ///
    /// The buffer/flag keys map one-to-one onto the closed event set;
    /// everything else is presentation-only or ignored.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.state.show_help {
                    self.state.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('1') => self.apply(PathEvent::AddBuffer(BufferVariant::Normal)),
            KeyCode::Char('2') => self.apply(PathEvent::AddBuffer(BufferVariant::LowThreshold)),
            KeyCode::Char('3') => self.apply(PathEvent::AddBuffer(BufferVariant::HighThreshold)),
            KeyCode::Char('x') | KeyCode::Backspace => self.apply(PathEvent::RemoveLast),
            KeyCode::Char('r') => self.apply(PathEvent::Reset),
            KeyCode::Char('s') => {
                let enabled = !self.path.setup_check();
                self.apply(PathEvent::SetSetupCheck(enabled));
            }
            KeyCode::Char('?') => self.state.show_help = !self.state.show_help,
            KeyCode::Tab => self.state.focused = self.state.focused.next(),
            _ => {}
        }
    }
}

/// Returns the help text shown in the popup.
pub fn help_text() -> &'static str {
    "\
Path editing:
  1              Add normal buffer
  2              Add LVT buffer (faster)
  3              Add HVT buffer (slower)
  x / Backspace  Remove last buffer
  r              Reset path
  s              Toggle setup check

View:
  Tab            Switch panel focus
  ?              Toggle help
  q / Esc        Quit"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FocusedPanel;

    fn make_app() -> TuiApp {
        TuiApp::new(PathConstants::default(), WaveformWindow::default())
    }

    #[test]
    fn app_starts_with_empty_path() {
        let app = make_app();
        assert!(app.path.is_empty());
        assert!(!app.path.setup_check());
        assert!(!app.should_quit);
        assert_eq!(app.breakdown.arrival_time_ns, 0.0);
        assert_eq!(app.waveforms.len(), 101);
    }

    #[test]
    fn number_keys_add_each_variant() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char('3'));
        let variants: Vec<BufferVariant> =
            app.path.buffers().iter().map(|b| b.variant).collect();
        assert_eq!(
            variants,
            vec![
                BufferVariant::Normal,
                BufferVariant::LowThreshold,
                BufferVariant::HighThreshold
            ]
        );
        assert!((app.breakdown.arrival_time_ns - 1.5).abs() < 1e-9);
    }

    #[test]
    fn breakdown_recomputed_on_every_event() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('1'));
        assert!((app.breakdown.arrival_time_ns - 0.5).abs() < 1e-9);
        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.breakdown.arrival_time_ns, 0.0);
    }

    #[test]
    fn remove_on_empty_reports_status() {
        let mut app = make_app();
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.state.status_message, "path is already empty");
        assert!(app.path.is_empty());
    }

    #[test]
    fn setup_toggle_flips_flag_and_required_time() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('s'));
        assert!(app.path.setup_check());
        assert!((app.breakdown.required_time_ns - 4.8).abs() < 1e-9);
        app.handle_key(KeyCode::Char('s'));
        assert!(!app.path.setup_check());
        assert!((app.breakdown.required_time_ns - 5.0).abs() < 1e-9);
    }

    #[test]
    fn reset_key_restores_initial_breakdown() {
        let mut app = make_app();
        let initial = app.breakdown.clone();
        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.breakdown, initial);
        assert_eq!(app.state.status_message, "reset to initial state");
    }

    #[test]
    fn quit_keys() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = make_app();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn esc_closes_help_before_quitting() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('?'));
        assert!(app.state.show_help);
        app.handle_key(KeyCode::Esc);
        assert!(!app.state.show_help);
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = make_app();
        assert_eq!(app.state.focused, FocusedPanel::Clocks);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.state.focused, FocusedPanel::Report);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.state.focused, FocusedPanel::Summary);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.state.focused, FocusedPanel::Clocks);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('z'));
        app.handle_key(KeyCode::F(5));
        assert!(app.path.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn waveforms_unchanged_by_events() {
        let mut app = make_app();
        let before = app.waveforms.clone();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.waveforms, before);
    }

    #[test]
    fn status_message_names_the_variant() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.state.status_message, "added LVT buffer (1 in path)");
    }
}
