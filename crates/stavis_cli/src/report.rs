//! The `stavis report` subcommand.
//!
//! Builds a data path from the insertions listed on the command line, runs
//! the analysis once, and prints the per-stage table plus the path summary
//! (text) or the serialized breakdown (JSON).

use std::error::Error;

use stavis_timing::{analyze, DataPath, DelayCatalog, TimingBreakdown};

use crate::{ReportArgs, ReportFormat};

/// Runs the report subcommand. Returns the process exit code.
pub fn run(args: &ReportArgs, config_dir: Option<&str>) -> Result<i32, Box<dyn Error>> {
    let config = crate::load_config_dir(config_dir)?;
    let catalog = DelayCatalog::from_constants(&config.timing);

    let mut path = DataPath::new();
    for kind in &args.buffers {
        path.add_buffer(&catalog, kind.variant());
    }
    path.set_setup_check(args.setup);

    let breakdown = analyze(&path, &config.timing);
    match args.format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
        ReportFormat::Text => print!("{}", render_text(&breakdown)),
    }

    Ok(0)
}

/// Renders the breakdown as a plain-text table followed by the summary.
fn render_text(breakdown: &TimingBreakdown) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:>10} {:>10}\n",
        "Instance", "Incr (ns)", "Total (ns)"
    ));
    for stage in &breakdown.stages {
        out.push_str(&format!(
            "{:<12} {:>10.2} {:>10.2}\n",
            stage.label, stage.incremental_ns, stage.cumulative_ns
        ));
    }
    out.push('\n');
    out.push_str(&breakdown.summary());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stavis_timing::{BufferVariant, PathConstants};

    fn breakdown_for(variants: &[BufferVariant], setup: bool) -> TimingBreakdown {
        let constants = PathConstants::default();
        let catalog = DelayCatalog::from_constants(&constants);
        let mut path = DataPath::new();
        for &variant in variants {
            path.add_buffer(&catalog, variant);
        }
        path.set_setup_check(setup);
        analyze(&path, &constants)
    }

    #[test]
    fn text_report_empty_path() {
        let text = render_text(&breakdown_for(&[], false));
        assert!(text.contains("Instance"));
        assert!(text
            .lines()
            .any(|l| l.starts_with("startflop") && l.ends_with("0.00")));
        assert!(text
            .lines()
            .any(|l| l.starts_with("endflop") && l.ends_with("0.00")));
        assert!(text.contains("= 5.0 - 0.0 = 5.0 (MET)"));
    }

    #[test]
    fn text_report_lists_buffers_in_order() {
        let text = render_text(&breakdown_for(
            &[
                BufferVariant::Normal,
                BufferVariant::LowThreshold,
                BufferVariant::HighThreshold,
            ],
            false,
        ));
        let buf1 = text.find("buf1").unwrap();
        let lvt = text.find("lvt_buf2").unwrap();
        let hvt = text.find("hvt_buf3").unwrap();
        assert!(buf1 < lvt && lvt < hvt);
        assert!(text.contains("1.50"));
    }

    #[test]
    fn text_report_with_setup_check() {
        let text = render_text(&breakdown_for(
            &[BufferVariant::LowThreshold, BufferVariant::HighThreshold],
            true,
        ));
        assert!(text.contains("= 4.8 - 1.0 = 3.8 (MET)"));
    }

    #[test]
    fn json_breakdown_serializes() {
        let breakdown = breakdown_for(&[BufferVariant::Normal], false);
        let json = serde_json::to_string_pretty(&breakdown).unwrap();
        assert!(json.contains("\"stages\""));
        assert!(json.contains("\"buf1\""));
        let back: TimingBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, breakdown);
    }
}
