//! The opaque boundary to the external randomizer.
//!
//! Everything hard (track shuffling, format compatibility, audio selection
//! and merging) lives behind this trait. The launcher only enumerates,
//! filters, and forwards.

use std::path::Path;

use crate::msu::{Msu, MsuType, ShuffleRequest};

/// Errors crossing the randomizer service boundary.
#[derive(Debug, thiserror::Error)]
pub enum MsuServiceError {
    #[error("Could not start randomizer '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Randomizer {operation} failed: {detail}")]
    Failed { operation: String, detail: String },

    #[error("Randomizer returned malformed {operation} output: {source}")]
    Malformed {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Capabilities of the external randomizer service.
///
/// Injected explicitly into the components that need it; tests substitute an
/// in-memory fake.
pub trait MsuService {
    /// All collection types the randomizer knows about, in its own
    /// enumeration order.
    fn msu_types(&self) -> Result<Vec<MsuType>, MsuServiceError>;

    /// All MSU collections found under `path`.
    fn lookup_msus(&self, path: &Path) -> Result<Vec<Msu>, MsuServiceError>;

    /// Shuffle the requested collections into a single output package next
    /// to the staged ROM. Synchronous and all-or-nothing.
    fn create_shuffled_msu(&self, request: &ShuffleRequest) -> Result<(), MsuServiceError>;
}
