//! The launcher flow, wired through explicit collaborators.
//!
//! The randomizer service and the launch step are injected so the flow can
//! be exercised end-to-end without a real randomizer or a spawned process.

use std::io::BufRead;
use std::path::Path;

use anyhow::Result;

use crate::cli::{choose_msu_type, choose_msus};
use crate::config::Settings;
use crate::msu::{MsuService, ShuffleRequest};
use crate::stage::stage_rom;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A clean abort; the reason was already logged.
    Aborted,
    /// The staged ROM was launched, with this many collections shuffled
    /// (zero means Vanilla Music was chosen).
    Launched { shuffled: usize },
}

/// Stage the ROM, run both selection menus, shuffle unless Vanilla Music
/// was chosen, and hand the staged path to `launcher`.
///
/// Every `Aborted` return is a clean, already-logged stop. Unexpected
/// faults (service failures, staging I/O errors, launch failures)
/// propagate as errors.
pub fn run(
    rom: &Path,
    settings: &Settings,
    service: &dyn MsuService,
    input: &mut impl BufRead,
    launcher: &mut dyn FnMut(&Path) -> Result<()>,
) -> Result<RunOutcome> {
    let Some(staged_rom) = stage_rom(rom, settings)? else {
        return Ok(RunOutcome::Aborted);
    };

    let Some(msu_type) = choose_msu_type(service, settings, input)? else {
        return Ok(RunOutcome::Aborted);
    };

    let Some(msus) = choose_msus(service, settings, &msu_type, input)? else {
        return Ok(RunOutcome::Aborted);
    };

    // Empty selection means Vanilla Music: launch the staged ROM as-is
    let shuffled = msus.len();
    if !msus.is_empty() {
        service.create_shuffled_msu(&ShuffleRequest::for_launcher(
            msus,
            msu_type,
            staged_rom.clone(),
        ))?;
    }

    launcher(&staged_rom)?;

    Ok(RunOutcome::Launched { shuffled })
}
