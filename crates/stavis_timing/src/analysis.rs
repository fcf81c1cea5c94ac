//! The timing calculator.
//!
//! Recomputes the full [`TimingBreakdown`] from the entire buffer chain on
//! every call — there is no incremental path. Chains are interactively
//! small, and recomputing from scratch keeps the output a pure function of
//! the state.

use crate::constants::PathConstants;
use crate::path::DataPath;
use crate::report::{PathStage, StageKind, TimingBreakdown, END_LABEL, START_LABEL};

/// Computes arrival time, required time, slack, and the per-stage breakdown.
///
/// The output depends only on `path` and `constants`: repeated calls with
/// the same inputs return identical results. All delays are non-negative in
/// a valid configuration, so cumulative delay is monotonic across stages.
pub fn analyze(path: &DataPath, constants: &PathConstants) -> TimingBreakdown {
    let mut cumulative = 0.0;
    let mut stages = Vec::with_capacity(path.len() + 2);

    stages.push(PathStage {
        label: START_LABEL.to_string(),
        kind: StageKind::LaunchFlop,
        incremental_ns: 0.0,
        cumulative_ns: 0.0,
    });

    for (i, buffer) in path.buffers().iter().enumerate() {
        cumulative += buffer.delay_ns;
        stages.push(PathStage {
            label: format!("{}{}", buffer.variant.label_prefix(), i + 1),
            kind: StageKind::Buffer(buffer.variant),
            incremental_ns: buffer.delay_ns,
            cumulative_ns: cumulative,
        });
    }

    // The flop-to-flop net delay applies even with zero buffers. The end
    // stage reports it in the cumulative column only, matching the report
    // convention that flop stages contribute no incremental delay of their
    // own.
    cumulative += constants.flop_to_flop_base_delay_ns;
    stages.push(PathStage {
        label: END_LABEL.to_string(),
        kind: StageKind::CaptureFlop,
        incremental_ns: 0.0,
        cumulative_ns: cumulative,
    });

    let arrival_time_ns = cumulative;
    let setup_penalty_ns = if path.setup_check() {
        constants.setup_time_penalty_ns
    } else {
        0.0
    };
    let required_time_ns = constants.clock_period_ns - setup_penalty_ns;

    TimingBreakdown {
        stages,
        arrival_time_ns,
        required_time_ns,
        slack_ns: required_time_ns - arrival_time_ns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BufferVariant, DelayCatalog};

    const TOL: f64 = 1e-9;

    fn stock() -> (PathConstants, DelayCatalog) {
        let constants = PathConstants::default();
        let catalog = DelayCatalog::from_constants(&constants);
        (constants, catalog)
    }

    #[test]
    fn empty_path_meets_timing() {
        let (constants, _) = stock();
        let breakdown = analyze(&DataPath::new(), &constants);
        assert_eq!(breakdown.arrival_time_ns, 0.0);
        assert_eq!(breakdown.required_time_ns, 5.0);
        assert_eq!(breakdown.slack_ns, 5.0);
        assert!(breakdown.met());
        assert_eq!(breakdown.verdict(), "MET");
    }

    #[test]
    fn single_normal_buffer_stages() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        path.add_buffer(&catalog, BufferVariant::Normal);

        let breakdown = analyze(&path, &constants);
        assert!((breakdown.arrival_time_ns - 0.5).abs() < TOL);
        assert_eq!(breakdown.stages.len(), 3);

        let start = &breakdown.stages[0];
        assert_eq!(start.label, "startflop");
        assert_eq!(start.kind, StageKind::LaunchFlop);
        assert_eq!(start.incremental_ns, 0.0);
        assert_eq!(start.cumulative_ns, 0.0);

        let buf = &breakdown.stages[1];
        assert_eq!(buf.label, "buf1");
        assert_eq!(buf.kind, StageKind::Buffer(BufferVariant::Normal));
        assert!((buf.incremental_ns - 0.5).abs() < TOL);
        assert!((buf.cumulative_ns - 0.5).abs() < TOL);

        let end = &breakdown.stages[2];
        assert_eq!(end.label, "endflop");
        assert_eq!(end.kind, StageKind::CaptureFlop);
        assert_eq!(end.incremental_ns, 0.0);
        assert!((end.cumulative_ns - 0.5).abs() < TOL);
    }

    #[test]
    fn mixed_variants_accumulate() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        path.add_buffer(&catalog, BufferVariant::LowThreshold);
        path.add_buffer(&catalog, BufferVariant::HighThreshold);

        let breakdown = analyze(&path, &constants);
        // 0.5*0.7 + 0.5*1.3 = 1.0
        assert!((breakdown.arrival_time_ns - 1.0).abs() < TOL);
        assert!((breakdown.slack_ns - 4.0).abs() < TOL);
    }

    #[test]
    fn setup_check_tightens_required_time() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        path.add_buffer(&catalog, BufferVariant::LowThreshold);
        path.add_buffer(&catalog, BufferVariant::HighThreshold);
        path.set_setup_check(true);

        let breakdown = analyze(&path, &constants);
        assert!((breakdown.required_time_ns - 4.8).abs() < TOL);
        assert!((breakdown.slack_ns - 3.8).abs() < TOL);
        assert!(breakdown.met());
    }

    #[test]
    fn labels_encode_variant_and_overall_position() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        path.add_buffer(&catalog, BufferVariant::Normal);
        path.add_buffer(&catalog, BufferVariant::LowThreshold);
        path.add_buffer(&catalog, BufferVariant::HighThreshold);

        let breakdown = analyze(&path, &constants);
        assert_eq!(breakdown.stages[1].label, "buf1");
        assert_eq!(breakdown.stages[2].label, "lvt_buf2");
        assert_eq!(breakdown.stages[3].label, "hvt_buf3");
    }

    #[test]
    fn flop_to_flop_delay_counts_toward_arrival() {
        let constants = PathConstants {
            flop_to_flop_base_delay_ns: 0.3,
            ..PathConstants::default()
        };
        let breakdown = analyze(&DataPath::new(), &constants);
        assert!((breakdown.arrival_time_ns - 0.3).abs() < TOL);
        // The end stage carries it in the cumulative column only.
        let end = breakdown.stages.last().unwrap();
        assert_eq!(end.incremental_ns, 0.0);
        assert!((end.cumulative_ns - 0.3).abs() < TOL);
    }

    #[test]
    fn analysis_is_deterministic() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        for _ in 0..4 {
            path.add_buffer(&catalog, BufferVariant::HighThreshold);
        }
        path.set_setup_check(true);

        let first = analyze(&path, &constants);
        let second = analyze(&path, &constants);
        assert_eq!(first, second);
    }

    #[test]
    fn cumulative_delay_is_monotonic() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        for variant in [
            BufferVariant::HighThreshold,
            BufferVariant::Normal,
            BufferVariant::LowThreshold,
            BufferVariant::Normal,
        ] {
            path.add_buffer(&catalog, variant);
        }

        let breakdown = analyze(&path, &constants);
        for pair in breakdown.stages.windows(2) {
            assert!(pair[1].cumulative_ns >= pair[0].cumulative_ns);
        }
    }

    #[test]
    fn add_then_remove_restores_breakdown_exactly() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        path.add_buffer(&catalog, BufferVariant::Normal);
        path.add_buffer(&catalog, BufferVariant::LowThreshold);

        let before = analyze(&path, &constants);
        path.add_buffer(&catalog, BufferVariant::HighThreshold);
        path.remove_last();
        let after = analyze(&path, &constants);
        assert_eq!(before, after);
    }

    #[test]
    fn reset_matches_fresh_state() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        for _ in 0..7 {
            path.add_buffer(&catalog, BufferVariant::Normal);
        }
        path.set_setup_check(true);
        path.reset();

        assert_eq!(
            analyze(&path, &constants),
            analyze(&DataPath::new(), &constants)
        );
    }

    #[test]
    fn slack_equation_holds() {
        let (constants, catalog) = stock();
        let mut path = DataPath::new();
        for _ in 0..11 {
            path.add_buffer(&catalog, BufferVariant::HighThreshold);
        }
        path.set_setup_check(true);

        let breakdown = analyze(&path, &constants);
        assert!(
            (breakdown.slack_ns - (breakdown.required_time_ns - breakdown.arrival_time_ns)).abs()
                < TOL
        );
        // 11 * 0.65 = 7.15 > 4.8: violated.
        assert!(!breakdown.met());
        assert_eq!(breakdown.verdict(), "VIOLATED");
    }
}
