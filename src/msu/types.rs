//! Value objects owned by the external randomizer.
//!
//! The launcher never interprets these beyond display, filtering, and
//! compatibility checks; the randomizer is the source of truth for all of
//! them.

use std::path::PathBuf;

use serde::Deserialize;

/// A compatibility category for MSU track collections.
///
/// `name` is the internal identifier, `display_name` what the user sees in
/// the selection menu. The configuration allow-list is matched against both.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MsuType {
    pub name: String,
    pub display_name: String,
}

/// A single MSU track collection as reported by the randomizer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Msu {
    pub display_name: String,
    pub path: PathBuf,
    pub num_unique_tracks: usize,
    /// Internal names of the types this collection can be shuffled into.
    #[serde(default)]
    pub compatible_types: Vec<String>,
}

impl Msu {
    /// Compatibility predicate against a target type, as reported by the
    /// randomizer's metadata.
    pub fn is_compatible_with(&self, msu_type: &MsuType) -> bool {
        self.compatible_types.iter().any(|t| t == &msu_type.name)
    }
}

/// Request handed to the randomizer's shuffle operation.
#[derive(Debug, Clone)]
pub struct ShuffleRequest {
    pub msus: Vec<Msu>,
    pub output_type: MsuType,
    pub output_path: PathBuf,
    /// Clear the output location before writing.
    pub empty_folder: bool,
    /// Open the resulting folder in the file manager afterwards.
    pub open_folder: bool,
    /// Previously shuffled collection to carry tracks over from.
    pub prev_msu: Option<Msu>,
}

impl ShuffleRequest {
    /// The request shape the launcher always sends: clear the output first,
    /// no folder popup, no carry-over from a previous shuffle.
    pub fn for_launcher(msus: Vec<Msu>, output_type: MsuType, output_path: PathBuf) -> Self {
        Self {
            msus,
            output_type,
            output_path,
            empty_folder: true,
            open_folder: false,
            prev_msu: None,
        }
    }
}
