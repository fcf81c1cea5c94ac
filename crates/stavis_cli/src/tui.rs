//! The `stavis tui` subcommand.

use std::error::Error;

use stavis_tui::run_tui;

/// Runs the interactive visualizer. Returns the process exit code.
pub fn run(config_dir: Option<&str>) -> Result<i32, Box<dyn Error>> {
    let config = crate::load_config_dir(config_dir)?;
    run_tui(config.timing, config.waveform)?;
    Ok(0)
}
