//! Configuration types deserialized from `stavis.toml`.

use serde::Deserialize;
use stavis_timing::{PathConstants, WaveformWindow};

/// The top-level configuration parsed from `stavis.toml`.
///
/// Both sections and every field within them are optional; anything missing
/// falls back to the built-in model defaults, so an empty file — or no file
/// at all — reproduces the stock teaching setup.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StavisConfig {
    /// Data-path timing constants.
    pub timing: PathConstants,
    /// Waveform sampling window.
    pub waveform: WaveformWindow,
}
