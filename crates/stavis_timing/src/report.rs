//! Timing breakdown types and the fixed-format path summary.
//!
//! A [`TimingBreakdown`] is derived data: recomputed from the path state on
//! every query and never persisted. Stage delays are stored at full
//! precision — rounding to display precision happens only when formatting.

use serde::{Deserialize, Serialize};

use crate::catalog::BufferVariant;

/// Label of the synthetic launch-flop stage.
pub const START_LABEL: &str = "startflop";

/// Label of the synthetic capture-flop stage.
pub const END_LABEL: &str = "endflop";

/// What a stage in the breakdown represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageKind {
    /// The synthetic launch-flop stage at the start of the path.
    LaunchFlop,
    /// An inserted buffer of the given variant.
    Buffer(BufferVariant),
    /// The synthetic capture-flop stage at the end of the path.
    CaptureFlop,
}

/// One row of the per-stage delay breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathStage {
    /// Stage label: `startflop`, `endflop`, or variant plus 1-based
    /// position (`buf1`, `lvt_buf2`, `hvt_buf3`).
    pub label: String,
    /// What this stage is.
    pub kind: StageKind,
    /// Delay added by this stage in nanoseconds.
    pub incremental_ns: f64,
    /// Cumulative delay up to and including this stage.
    pub cumulative_ns: f64,
}

/// The full derived timing picture for one path state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingBreakdown {
    /// Ordered stages from launch flop to capture flop.
    pub stages: Vec<PathStage>,
    /// Cumulative delay at the capture flop.
    pub arrival_time_ns: f64,
    /// Latest allowed arrival: clock period minus any setup penalty.
    pub required_time_ns: f64,
    /// `required_time_ns - arrival_time_ns`.
    pub slack_ns: f64,
}

impl TimingBreakdown {
    /// Whether the timing constraint is met (non-negative slack).
    pub fn met(&self) -> bool {
        self.slack_ns >= 0.0
    }

    /// The pass/fail verdict word used in reports.
    pub fn verdict(&self) -> &'static str {
        if self.met() {
            "MET"
        } else {
            "VIOLATED"
        }
    }

    /// Renders the fixed-format path summary.
    ///
    /// The structure — startpoint, endpoint, path type, then a slack
    /// equation with 1-decimal times and the MET/VIOLATED verdict — is a
    /// compatibility contract for report consumers.
    pub fn summary(&self) -> String {
        format!(
            "Startpoint : {START_LABEL}\n\
             Endpoint   : {END_LABEL}\n\
             Pathtype   : setup check\n\
             \n\
             Slack = data required time - data arrival time = {:.1} - {:.1} = {:.1} ({})",
            self.required_time_ns,
            self.arrival_time_ns,
            self.slack_ns,
            self.verdict()
        )
    }
}
