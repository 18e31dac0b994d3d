//! Launches the configured application against the staged ROM.
//!
//! The spawn is deliberately fire-and-forget: the child is never waited on
//! and its exit code is ignored. The orchestrator sleeps briefly after
//! launching so the child outlives the parent's console teardown; that
//! delay is a heuristic handoff, not a synchronization guarantee.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::config::Settings;

/// Token in the argument template replaced with the staged ROM path.
pub const ROM_TOKEN: &str = "%rom%";

/// How the staged ROM gets started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchCommand {
    /// No application configured: open the ROM through the OS file
    /// association.
    ShellOpen(String),
    /// Run the configured application with an expanded argument string.
    Application { program: String, arguments: String },
}

/// Expand the configured application and argument template for a staged ROM.
///
/// With an application but no template the single argument is the quoted
/// ROM path. A template containing `%rom%` has the token replaced with the
/// unquoted path; a template without it gets the quoted path appended.
pub fn build_command(rom_path: &Path, app: Option<&str>, template: Option<&str>) -> LaunchCommand {
    let rom = rom_path.display().to_string();

    let program = match app {
        Some(app) if !app.is_empty() => app.to_string(),
        _ => return LaunchCommand::ShellOpen(rom),
    };

    let arguments = match template {
        None | Some("") => format!("\"{rom}\""),
        Some(template) if template.contains(ROM_TOKEN) => template.replace(ROM_TOKEN, &rom),
        Some(template) => format!("{template} \"{rom}\""),
    };

    LaunchCommand::Application { program, arguments }
}

/// Split an expanded argument string on whitespace, honoring double-quoted
/// segments (quotes stripped).
pub fn split_arguments(arguments: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut seen_any = false;

    for c in arguments.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                seen_any = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if seen_any {
                    args.push(std::mem::take(&mut current));
                    seen_any = false;
                }
            }
            c => {
                current.push(c);
                seen_any = true;
            }
        }
    }
    if seen_any {
        args.push(current);
    }

    args
}

/// Start the configured application (or file association) on the staged
/// ROM, detached.
pub fn launch(rom_path: &Path, settings: &Settings) -> Result<()> {
    if !rom_path.exists() {
        bail!("{} not found", rom_path.display());
    }

    let command = build_command(
        rom_path,
        settings.launch_application.as_deref(),
        settings.launch_arguments.as_deref(),
    );

    match command {
        LaunchCommand::ShellOpen(path) => {
            info!("Launching {path}");
            open::that_detached(&path)
                .with_context(|| format!("Failed to open {path} via file association"))?;
        }
        LaunchCommand::Application { program, arguments } => {
            info!("Launching {program} {arguments}");
            let child = Command::new(&program)
                .args(split_arguments(&arguments))
                .spawn()
                .with_context(|| format!("Failed to launch {program}"))?;
            // Detach: the child is never waited on.
            drop(child);
        }
    }

    Ok(())
}
