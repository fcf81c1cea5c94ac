//! The mutable timing state: the buffer chain and the setup-check flag.
//!
//! [`DataPath`] is the only mutable state in the system. It is an explicitly
//! owned object — constructed by the caller and passed into the analysis —
//! so independent sessions and tests never share state. The chain only
//! grows by appending at the tail and only shrinks by removing the tail;
//! an element's delay is never mutated after insertion.

use serde::{Deserialize, Serialize};

use crate::catalog::{BufferVariant, DelayCatalog};

/// One inserted buffer instance.
///
/// The delay is resolved from the catalog at insertion time and is
/// immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BufferInsertion {
    /// Which variant was inserted.
    pub variant: BufferVariant,
    /// Delay contribution in nanoseconds.
    pub delay_ns: f64,
}

/// A discrete user event from the closed input set.
///
/// These are the only events the engine accepts; anything else is rejected
/// at the input-collaborator boundary and never reaches this type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathEvent {
    /// Insert a buffer of the given variant at the end of the chain.
    AddBuffer(BufferVariant),
    /// Remove the most recently inserted buffer.
    RemoveLast,
    /// Restore the initial state: empty chain, setup check off.
    Reset,
    /// Set the setup-check flag.
    SetSetupCheck(bool),
}

/// The ordered chain of inserted buffers plus the setup-check flag.
///
/// Insertion order is data-path order from launch flop to capture flop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPath {
    chain: Vec<BufferInsertion>,
    setup_check: bool,
}

impl DataPath {
    /// Creates an empty path with the setup check off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a buffer of the given variant, resolving its delay from the
    /// catalog. The chain has no enforced upper bound.
    pub fn add_buffer(&mut self, catalog: &DelayCatalog, variant: BufferVariant) {
        self.chain.push(BufferInsertion {
            variant,
            delay_ns: catalog.delay_of(variant),
        });
    }

    /// Removes the most recently added buffer and returns it.
    ///
    /// A defined no-op on an empty chain, not an error.
    pub fn remove_last(&mut self) -> Option<BufferInsertion> {
        self.chain.pop()
    }

    /// Clears the chain and turns the setup check off.
    pub fn reset(&mut self) {
        self.chain.clear();
        self.setup_check = false;
    }

    /// Sets the setup-check flag. Independent of chain mutations.
    pub fn set_setup_check(&mut self, enabled: bool) {
        self.setup_check = enabled;
    }

    /// Applies one event. Every event is total; none can fail.
    pub fn apply(&mut self, catalog: &DelayCatalog, event: PathEvent) {
        match event {
            PathEvent::AddBuffer(variant) => self.add_buffer(catalog, variant),
            PathEvent::RemoveLast => {
                self.remove_last();
            }
            PathEvent::Reset => self.reset(),
            PathEvent::SetSetupCheck(enabled) => self.set_setup_check(enabled),
        }
    }

    /// Whether the setup check is currently enabled.
    pub fn setup_check(&self) -> bool {
        self.setup_check
    }

    /// The inserted buffers in path order.
    pub fn buffers(&self) -> &[BufferInsertion] {
        &self.chain
    }

    /// Number of inserted buffers.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether no buffers have been inserted.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
