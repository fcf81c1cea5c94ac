//! The fixed buffer delay catalog.
//!
//! Maps each buffer variant to its unit delay contribution. The catalog is
//! pure data fixed at configuration time: the variant set is closed, so
//! lookups cannot fail.

use serde::{Deserialize, Serialize};

use crate::constants::PathConstants;

/// The buffer flavors a user can insert into the data path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BufferVariant {
    /// Standard-threshold buffer.
    Normal,
    /// Low-threshold (LVT) buffer: faster, leakier.
    LowThreshold,
    /// High-threshold (HVT) buffer: slower, leakage-resistant.
    HighThreshold,
}

impl BufferVariant {
    /// Identifier prefix used in stage labels (`buf`, `lvt_buf`, `hvt_buf`).
    pub fn label_prefix(self) -> &'static str {
        match self {
            Self::Normal => "buf",
            Self::LowThreshold => "lvt_buf",
            Self::HighThreshold => "hvt_buf",
        }
    }

    /// Human-readable variant name for tables and status messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::LowThreshold => "LVT",
            Self::HighThreshold => "HVT",
        }
    }
}

/// Fixed lookup from buffer variant to unit delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayCatalog {
    /// Delay of a normal buffer in nanoseconds.
    pub base_delay_ns: f64,
    /// Multiplier applied for low-threshold buffers.
    pub lvt_factor: f64,
    /// Multiplier applied for high-threshold buffers.
    pub hvt_factor: f64,
}

impl DelayCatalog {
    /// Builds the catalog from the model constants.
    pub fn from_constants(constants: &PathConstants) -> Self {
        Self {
            base_delay_ns: constants.base_delay_ns,
            lvt_factor: constants.lvt_factor,
            hvt_factor: constants.hvt_factor,
        }
    }

    /// Returns the delay contribution of one buffer of the given variant.
    pub fn delay_of(&self, variant: BufferVariant) -> f64 {
        match variant {
            BufferVariant::Normal => self.base_delay_ns,
            BufferVariant::LowThreshold => self.base_delay_ns * self.lvt_factor,
            BufferVariant::HighThreshold => self.base_delay_ns * self.hvt_factor,
        }
    }
}
