//! TUI widget modules.
//!
//! Each module contains a stateless rendering function that draws a
//! specific panel of the interface into a ratatui buffer.

pub mod clocks;
pub mod report_table;
pub mod status_bar;
pub mod summary;
