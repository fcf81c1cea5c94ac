//! Timing state and computation engine for the stavis teaching tool.
//!
//! Models a single clock-to-clock data path: user-inserted buffers
//! accumulate delay between a launch flop and a capture flop, and the
//! engine reports whether the resulting arrival time meets the required
//! time (slack). It also derives the sampled clock waveforms the
//! presentation layer draws.
//!
//! # Usage
//!
//! ```
//! use stavis_timing::{analyze, BufferVariant, DataPath, DelayCatalog, PathConstants};
//!
//! let constants = PathConstants::default();
//! let catalog = DelayCatalog::from_constants(&constants);
//!
//! let mut path = DataPath::new();
//! path.add_buffer(&catalog, BufferVariant::Normal);
//! path.set_setup_check(true);
//!
//! let breakdown = analyze(&path, &constants);
//! assert!(breakdown.met());
//! println!("{}", breakdown.summary());
//! ```
//!
//! # Architecture
//!
//! - [`catalog`] — fixed buffer-variant → delay lookup
//! - [`path`] — the mutable chain state and its closed event set
//! - [`analysis`] — pure recomputation of the timing breakdown
//! - [`report`] — breakdown types and the fixed-format summary
//! - [`waveform`] — clock level sampling over the display window
//! - [`constants`] — the fixed model constants

#![warn(missing_docs)]

pub mod analysis;
pub mod catalog;
pub mod constants;
pub mod path;
pub mod report;
pub mod waveform;

pub use analysis::analyze;
pub use catalog::{BufferVariant, DelayCatalog};
pub use constants::{PathConstants, WaveformWindow};
pub use path::{BufferInsertion, DataPath, PathEvent};
pub use report::{PathStage, StageKind, TimingBreakdown};
pub use waveform::ClockWaveforms;
