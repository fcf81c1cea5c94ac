//! Fixed model constants.
//!
//! The tool models exactly one data path between one launch flop and one
//! capture flop; every tunable of that model lives here. The constants are
//! not user-adjustable at runtime — they are resolved once (from
//! `stavis.toml` via the config crate, or the defaults below) and passed
//! into the engine.

use serde::{Deserialize, Serialize};

/// Constants governing the data path and its timing checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConstants {
    /// Clock period in nanoseconds, shared by the launch and capture clocks.
    pub clock_period_ns: f64,
    /// Delay of one normal buffer in nanoseconds.
    pub base_delay_ns: f64,
    /// Delay multiplier for low-threshold (LVT) buffers. Below 1.0: faster.
    pub lvt_factor: f64,
    /// Delay multiplier for high-threshold (HVT) buffers. Above 1.0: slower.
    pub hvt_factor: f64,
    /// Flop-to-flop net delay present even with zero buffers inserted.
    pub flop_to_flop_base_delay_ns: f64,
    /// Margin subtracted from the required time when the setup check is on.
    pub setup_time_penalty_ns: f64,
    /// Phase offset of the launch clock relative to the capture clock.
    pub launch_clock_delay_ns: f64,
}

impl Default for PathConstants {
    fn default() -> Self {
        Self {
            clock_period_ns: 5.0,
            base_delay_ns: 0.5,
            lvt_factor: 0.7,
            hvt_factor: 1.3,
            flop_to_flop_base_delay_ns: 0.0,
            setup_time_penalty_ns: 0.2,
            launch_clock_delay_ns: 0.0,
        }
    }
}

/// The sampled time window for waveform generation.
///
/// The window always starts at time 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformWindow {
    /// End of the window in nanoseconds (inclusive).
    pub end_ns: f64,
    /// Sample step in nanoseconds.
    pub step_ns: f64,
}

impl Default for WaveformWindow {
    fn default() -> Self {
        Self {
            end_ns: 10.0,
            step_ns: 0.1,
        }
    }
}
