//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// rom-launcher - Stage a ROM, pair it with a shuffled MSU track collection,
/// and launch the configured application
#[derive(Parser, Debug)]
#[command(name = "rom-launcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the source ROM file
    pub rom: PathBuf,
}
