//! The `stavis init` subcommand — writes a default `stavis.toml`.

use std::error::Error;
use std::path::Path;

/// The scaffolded configuration. Every value equals the built-in default,
/// so the generated file changes nothing until edited.
const DEFAULT_CONFIG: &str = r#"# stavis configuration
# All values are optional; anything removed falls back to these defaults.

[timing]
clock_period_ns = 5.0
base_delay_ns = 0.5
lvt_factor = 0.7
hvt_factor = 1.3
flop_to_flop_base_delay_ns = 0.0
setup_time_penalty_ns = 0.2
launch_clock_delay_ns = 0.0

[waveform]
end_ns = 10.0
step_ns = 0.1
"#;

/// Runs the init subcommand. Returns the process exit code.
pub fn run(dir: Option<&str>, quiet: bool) -> Result<i32, Box<dyn Error>> {
    let dir = Path::new(dir.unwrap_or("."));
    let config_path = dir.join("stavis.toml");

    if config_path.exists() {
        return Err(format!("{} already exists", config_path.display()).into());
    }

    std::fs::create_dir_all(dir)?;
    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    if !quiet {
        println!("wrote {}", config_path.display());
    }
    Ok(0)
}
