//! Shared test utilities and fixture builders

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rom_launcher::config::Settings;
use rom_launcher::msu::{Msu, MsuService, MsuServiceError, MsuType, ShuffleRequest};

/// In-memory [`MsuService`] that records every shuffle request.
pub struct FakeMsuService {
    pub types: Vec<MsuType>,
    pub msus: Vec<Msu>,
    shuffle_requests: Mutex<Vec<ShuffleRequest>>,
}

impl FakeMsuService {
    pub fn new(types: Vec<MsuType>, msus: Vec<Msu>) -> Self {
        Self {
            types,
            msus,
            shuffle_requests: Mutex::new(Vec::new()),
        }
    }

    /// Every shuffle request seen so far.
    pub fn shuffle_requests(&self) -> Vec<ShuffleRequest> {
        self.shuffle_requests.lock().unwrap().clone()
    }
}

impl MsuService for FakeMsuService {
    fn msu_types(&self) -> Result<Vec<MsuType>, MsuServiceError> {
        Ok(self.types.clone())
    }

    fn lookup_msus(&self, _path: &Path) -> Result<Vec<Msu>, MsuServiceError> {
        Ok(self.msus.clone())
    }

    fn create_shuffled_msu(&self, request: &ShuffleRequest) -> Result<(), MsuServiceError> {
        self.shuffle_requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}

pub fn msu_type(name: &str, display_name: &str) -> MsuType {
    MsuType {
        name: name.to_string(),
        display_name: display_name.to_string(),
    }
}

pub fn msu(display_name: &str, num_unique_tracks: usize, compatible_types: &[&str]) -> Msu {
    Msu {
        display_name: display_name.to_string(),
        path: PathBuf::from(format!("/msus/{display_name}")),
        num_unique_tracks,
        compatible_types: compatible_types.iter().map(|t| t.to_string()).collect(),
    }
}

/// A service with one type ("snes") and three offerable collections plus
/// two that must be filtered out (too few tracks / wrong type).
pub fn populated_service() -> FakeMsuService {
    FakeMsuService::new(
        vec![msu_type("snes", "Super Nintendo")],
        vec![
            msu("Zelda Orchestra", 40, &["snes"]),
            msu("Chill Mix", 25, &["snes"]),
            msu("Tiny Pack", 5, &["snes"]),
            msu("Metal Covers", 32, &["snes"]),
            msu("Game Boy Beeps", 50, &["gb"]),
        ],
    )
}

/// Settings pointing at existing temp directories for MSU search and
/// staging.
pub fn settings_for(msu_dir: &Path, target_dir: &Path) -> Settings {
    Settings {
        msu_path: msu_dir.display().to_string(),
        target_path: target_dir.display().to_string(),
        ..Settings::default()
    }
}
