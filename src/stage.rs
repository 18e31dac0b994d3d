//! File stager: copies the source ROM into a per-ROM working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::Settings;

/// Copy the source ROM to `{target}/{stem}/{file name}`, clearing any prior
/// copy best-effort.
///
/// Returns `Ok(None)` after logging when the source file or the configured
/// target directory is missing, or when no staged file exists after the
/// copy attempt; the caller treats that as a clean abort. Deletion and copy
/// failures are warnings only: success is decided solely by whether the
/// staged path exists on disk afterwards.
///
/// Known quirk, kept intentionally: a stale copy that can be neither
/// deleted nor overwritten still satisfies the final existence check, so
/// the stale file is silently used for the rest of the run.
pub fn stage_rom(source: &Path, settings: &Settings) -> Result<Option<PathBuf>> {
    if !source.is_file() {
        error!("File not found {}", source.display());
        return Ok(None);
    }

    let target_dir = Path::new(&settings.target_path);
    if !target_dir.is_dir() {
        error!("Destination path {} does not exist", target_dir.display());
        return Ok(None);
    }

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("rom");
    let file_name = source
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("rom");

    let rom_dir = target_dir.join(stem);
    std::fs::create_dir_all(&rom_dir)
        .with_context(|| format!("Failed to create staging directory {}", rom_dir.display()))?;

    let staged = rom_dir.join(file_name);
    if staged.exists() {
        if let Err(e) = std::fs::remove_file(&staged) {
            warn!("Could not delete previous rom file: {e}");
        }
    }

    match std::fs::copy(source, &staged) {
        Ok(_) => info!("Copied rom file to {}", staged.display()),
        Err(e) => warn!("Could not copy rom file: {e}"),
    }

    if staged.exists() {
        Ok(Some(staged))
    } else {
        error!("No staged rom file at {}", staged.display());
        Ok(None)
    }
}
