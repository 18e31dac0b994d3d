//! Interactive MSU type and collection selection.

use std::io::BufRead;
use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::cli::prompts::{print_entry, print_prompt, read_index};
use crate::config::Settings;
use crate::msu::{Msu, MsuService, MsuType};

/// Collections with this many unique tracks or fewer are not offered.
const MIN_UNIQUE_TRACKS: usize = 10;

/// Outcome of the collection menu, including the two synthetic entries
/// appended after the real collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsuChoice {
    /// A single collection, by zero-based position in the filtered list.
    Single(usize),
    /// Shuffle across every filtered collection.
    ShuffleAll,
    /// No shuffling; launch the staged ROM unmodified.
    Vanilla,
}

/// Map a validated 1-based menu index onto the selection semantics:
/// `[1, count]` picks one collection, `count + 1` is Shuffle All,
/// `count + 2` is Vanilla Music.
pub fn interpret_choice(index: usize, count: usize) -> Option<MsuChoice> {
    if (1..=count).contains(&index) {
        Some(MsuChoice::Single(index - 1))
    } else if index == count + 1 {
        Some(MsuChoice::ShuffleAll)
    } else if index == count + 2 {
        Some(MsuChoice::Vanilla)
    } else {
        None
    }
}

/// Ask the user for the target MSU type.
///
/// Types are shown in the service's enumeration order, reduced to those
/// passing the configured allow-list. Returns `Ok(None)` on an invalid
/// selection; the caller aborts the run.
pub fn choose_msu_type(
    service: &dyn MsuService,
    settings: &Settings,
    input: &mut impl BufRead,
) -> Result<Option<MsuType>> {
    let types: Vec<MsuType> = service
        .msu_types()?
        .into_iter()
        .filter(|t| settings.msu_type_matches(t))
        .collect();

    for (i, msu_type) in types.iter().enumerate() {
        print_entry(i + 1, &msu_type.display_name);
    }
    print_prompt("an MSU Type", types.len());

    match read_index(input, types.len())? {
        Some(index) => Ok(Some(types[index - 1].clone())),
        None => {
            info!("Invalid selection");
            Ok(None)
        }
    }
}

/// Reduce the looked-up collections to the ones worth offering: more than
/// [`MIN_UNIQUE_TRACKS`] unique tracks and compatible with the chosen type,
/// sorted ascending by display name.
pub fn filter_msus(msus: Vec<Msu>, msu_type: &MsuType) -> Vec<Msu> {
    let mut msus: Vec<Msu> = msus
        .into_iter()
        .filter(|m| m.num_unique_tracks > MIN_UNIQUE_TRACKS && m.is_compatible_with(msu_type))
        .collect();
    msus.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    msus
}

/// Ask the user which collections to shuffle.
///
/// Returns `Ok(Some(vec))` with one collection, every filtered collection
/// (Shuffle All), or none (Vanilla Music, meaning skip shuffling);
/// `Ok(None)` on a missing search path or invalid selection.
pub fn choose_msus(
    service: &dyn MsuService,
    settings: &Settings,
    msu_type: &MsuType,
    input: &mut impl BufRead,
) -> Result<Option<Vec<Msu>>> {
    let msu_path = Path::new(&settings.msu_path);
    if !msu_path.is_dir() {
        error!("MSU path {} does not exist", msu_path.display());
        return Ok(None);
    }

    let msus = filter_msus(service.lookup_msus(msu_path)?, msu_type);

    for (i, msu) in msus.iter().enumerate() {
        print_entry(
            i + 1,
            &format!("{} ({} Tracks)", msu.display_name, msu.num_unique_tracks),
        );
    }
    print_entry(msus.len() + 1, "Shuffle All");
    print_entry(msus.len() + 2, "Vanilla Music");
    print_prompt("an MSU", msus.len() + 2);

    let choice = read_index(input, msus.len() + 2)?
        .and_then(|index| interpret_choice(index, msus.len()));

    match choice {
        Some(MsuChoice::Single(i)) => Ok(Some(vec![msus[i].clone()])),
        Some(MsuChoice::ShuffleAll) => Ok(Some(msus)),
        Some(MsuChoice::Vanilla) => Ok(Some(Vec::new())),
        None => {
            info!("Invalid selection");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_single() {
        assert_eq!(interpret_choice(1, 3), Some(MsuChoice::Single(0)));
        assert_eq!(interpret_choice(3, 3), Some(MsuChoice::Single(2)));
    }

    #[test]
    fn test_interpret_shuffle_all() {
        assert_eq!(interpret_choice(4, 3), Some(MsuChoice::ShuffleAll));
    }

    #[test]
    fn test_interpret_vanilla() {
        assert_eq!(interpret_choice(5, 3), Some(MsuChoice::Vanilla));
    }

    #[test]
    fn test_interpret_out_of_range() {
        assert_eq!(interpret_choice(0, 3), None);
        assert_eq!(interpret_choice(6, 3), None);
    }

    #[test]
    fn test_interpret_empty_list_still_offers_synthetic_entries() {
        assert_eq!(interpret_choice(1, 0), Some(MsuChoice::ShuffleAll));
        assert_eq!(interpret_choice(2, 0), Some(MsuChoice::Vanilla));
    }
}
