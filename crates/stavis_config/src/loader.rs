//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::StavisConfig;

/// Loads and validates `stavis.toml` from a directory.
///
/// A missing file is not an error: the built-in defaults are returned,
/// since the stock constants need no file at all.
pub fn load_config(dir: &Path) -> Result<StavisConfig, ConfigError> {
    let config_path = dir.join("stavis.toml");
    if !config_path.exists() {
        return Ok(StavisConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<StavisConfig, ConfigError> {
    let config: StavisConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that every constant is finite and within its legal range.
///
/// NaN fails every comparison below, so the positivity checks reject it
/// along with out-of-range values.
fn validate_config(config: &StavisConfig) -> Result<(), ConfigError> {
    let t = &config.timing;
    let w = &config.waveform;

    if !(t.clock_period_ns > 0.0 && t.clock_period_ns.is_finite()) {
        return Err(invalid("timing.clock_period_ns must be positive"));
    }
    if !(t.base_delay_ns >= 0.0 && t.base_delay_ns.is_finite()) {
        return Err(invalid("timing.base_delay_ns must be non-negative"));
    }
    if !(t.lvt_factor > 0.0 && t.lvt_factor.is_finite()) {
        return Err(invalid("timing.lvt_factor must be positive"));
    }
    if !(t.hvt_factor > 0.0 && t.hvt_factor.is_finite()) {
        return Err(invalid("timing.hvt_factor must be positive"));
    }
    if !(t.flop_to_flop_base_delay_ns >= 0.0 && t.flop_to_flop_base_delay_ns.is_finite()) {
        return Err(invalid(
            "timing.flop_to_flop_base_delay_ns must be non-negative",
        ));
    }
    if !(t.setup_time_penalty_ns >= 0.0 && t.setup_time_penalty_ns.is_finite()) {
        return Err(invalid("timing.setup_time_penalty_ns must be non-negative"));
    }
    if !(t.launch_clock_delay_ns >= 0.0 && t.launch_clock_delay_ns.is_finite()) {
        return Err(invalid("timing.launch_clock_delay_ns must be non-negative"));
    }
    if !(w.step_ns > 0.0 && w.step_ns.is_finite()) {
        return Err(invalid("waveform.step_ns must be positive"));
    }
    if !(w.end_ns >= w.step_ns && w.end_ns.is_finite()) {
        return Err(invalid("waveform.end_ns must be at least one step"));
    }
    Ok(())
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::Validation(msg.to_string())
}
