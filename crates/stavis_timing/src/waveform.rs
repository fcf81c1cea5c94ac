//! Clock waveform sampling.
//!
//! Produces the two phase-related clock traces over the fixed display
//! window. The generator is pure and independent of the buffer chain: the
//! clocks do not change when the data path does, so the samples can be
//! computed once per session and reused across renders.

use serde::{Deserialize, Serialize};

use crate::constants::WaveformWindow;

/// Sampled launch/capture clock levels over the display window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockWaveforms {
    /// Sample times in nanoseconds: `0, step, 2*step, ..., end`.
    pub time_points_ns: Vec<f64>,
    /// Launch clock level (0 or 1) at each sample time.
    pub launch_levels: Vec<u8>,
    /// Capture clock level (0 or 1) at each sample time.
    pub capture_levels: Vec<u8>,
}

impl ClockWaveforms {
    /// Samples both clocks over the given window.
    ///
    /// Each clock is high during the first half of its period. The launch
    /// clock is shifted by `launch_clock_delay_ns`; `rem_euclid` keeps the
    /// wrapped phase non-negative even when the shift pushes a sample time
    /// below zero.
    pub fn generate(
        window: &WaveformWindow,
        clock_period_ns: f64,
        launch_clock_delay_ns: f64,
    ) -> Self {
        let count = (window.end_ns / window.step_ns).round() as usize + 1;
        let mut time_points_ns = Vec::with_capacity(count);
        let mut launch_levels = Vec::with_capacity(count);
        let mut capture_levels = Vec::with_capacity(count);

        for i in 0..count {
            let t = i as f64 * window.step_ns;
            time_points_ns.push(t);
            capture_levels.push(level_at(t, clock_period_ns));
            launch_levels.push(level_at(t - launch_clock_delay_ns, clock_period_ns));
        }

        Self {
            time_points_ns,
            launch_levels,
            capture_levels,
        }
    }

    /// Number of samples in the window.
    pub fn len(&self) -> usize {
        self.time_points_ns.len()
    }

    /// Whether the window contains no samples.
    pub fn is_empty(&self) -> bool {
        self.time_points_ns.is_empty()
    }

    /// The last sample time, i.e. the window end.
    pub fn end_ns(&self) -> f64 {
        self.time_points_ns.last().copied().unwrap_or(0.0)
    }
}

/// Level of a 50%-duty clock at time `t`, with the phase wrapped into
/// `[0, period)` via a non-negative remainder.
fn level_at(t: f64, period_ns: f64) -> u8 {
    if t.rem_euclid(period_ns) < period_ns / 2.0 {
        1
    } else {
        0
    }
}
