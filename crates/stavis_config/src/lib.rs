//! Parsing and validation of `stavis.toml` configuration files.
//!
//! This crate reads the optional configuration file and produces the
//! strongly-typed model constants consumed by the timing engine. The file
//! overrides individual constants; everything left unspecified keeps the
//! stock teaching values.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::StavisConfig;
