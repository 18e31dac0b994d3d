//! rom-launcher: stage a ROM, pick an MSU track collection, shuffle, launch.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use rom_launcher::app::{run, RunOutcome};
use rom_launcher::cli::Cli;
use rom_launcher::config::{Settings, SETTINGS_FILE};
use rom_launcher::launch::launch;
use rom_launcher::logging;
use rom_launcher::msu::MsuRandomizer;

/// Grace period before exiting so the detached child outlives the parent's
/// console teardown. A heuristic, not a guarantee.
const LAUNCH_HANDOFF: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held for the whole run so file logs flush at exit
    let _log_guard = logging::init();

    // First run only bootstraps the settings file
    let Some(settings) = Settings::load_or_init(Path::new(SETTINGS_FILE))? else {
        return Ok(());
    };

    let service = MsuRandomizer::from_env();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let outcome = run(
        &cli.rom,
        &settings,
        &service,
        &mut input,
        &mut |rom| launch(rom, &settings),
    )?;

    if matches!(outcome, RunOutcome::Launched { .. }) {
        std::thread::sleep(LAUNCH_HANDOFF);
    }

    Ok(())
}
