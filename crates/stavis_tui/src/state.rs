//! TUI state management.
//!
//! Holds the presentation-only state: panel focus, the help popup flag,
//! and the status message. The timing model itself lives in
//! [`TuiApp`](crate::app::TuiApp).

/// Which panel currently has keyboard focus.
///
/// Focus only affects border highlighting; the key bindings are global.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusedPanel {
    /// The clock waveform panel at the top.
    Clocks,
    /// The path report table.
    Report,
    /// The slack summary panel.
    Summary,
}

impl FocusedPanel {
    /// The next panel in Tab order.
    pub fn next(self) -> Self {
        match self {
            Self::Clocks => Self::Report,
            Self::Report => Self::Summary,
            Self::Summary => Self::Clocks,
        }
    }
}

/// Presentation state that is not part of the timing model.
#[derive(Clone, Debug)]
pub struct TuiState {
    /// Which panel has focus.
    pub focused: FocusedPanel,
    /// Whether the help popup is visible.
    pub show_help: bool,
    /// Message describing the last handled event.
    pub status_message: String,
}

impl TuiState {
    /// Creates the initial presentation state.
    pub fn new() -> Self {
        Self {
            focused: FocusedPanel::Clocks,
            show_help: false,
            status_message: String::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}
