//! Subprocess adapter for the external MSU randomizer.
//!
//! The randomizer executable answers `types --json` and `lookup <path>
//! --json` with JSON arrays on stdout, and performs the shuffle via its
//! `shuffle` subcommand. The binary name comes from `MSU_RANDOMIZER_BIN`
//! when set.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::msu::{Msu, MsuService, MsuServiceError, MsuType, ShuffleRequest};

const DEFAULT_COMMAND: &str = "msu-randomizer";
const COMMAND_ENV: &str = "MSU_RANDOMIZER_BIN";

/// Production [`MsuService`] backed by the randomizer executable.
pub struct MsuRandomizer {
    command: String,
}

impl MsuRandomizer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Resolve the randomizer binary from the environment, falling back to
    /// the default name on the PATH.
    pub fn from_env() -> Self {
        let command =
            std::env::var(COMMAND_ENV).unwrap_or_else(|_| DEFAULT_COMMAND.to_string());
        Self::new(command)
    }

    fn run(&self, operation: &str, args: &[&str]) -> Result<String, MsuServiceError> {
        debug!(command = %self.command, ?args, "Invoking randomizer");

        let output = Command::new(&self.command)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| MsuServiceError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(MsuServiceError::Failed {
                operation: operation.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl MsuService for MsuRandomizer {
    fn msu_types(&self) -> Result<Vec<MsuType>, MsuServiceError> {
        let stdout = self.run("types", &["types", "--json"])?;
        serde_json::from_str(&stdout).map_err(|source| MsuServiceError::Malformed {
            operation: "types".to_string(),
            source,
        })
    }

    fn lookup_msus(&self, path: &Path) -> Result<Vec<Msu>, MsuServiceError> {
        let path_arg = path.display().to_string();
        let stdout = self.run("lookup", &["lookup", &path_arg, "--json"])?;
        serde_json::from_str(&stdout).map_err(|source| MsuServiceError::Malformed {
            operation: "lookup".to_string(),
            source,
        })
    }

    fn create_shuffled_msu(&self, request: &ShuffleRequest) -> Result<(), MsuServiceError> {
        let mut args: Vec<String> = vec!["shuffle".to_string()];
        for msu in &request.msus {
            args.push(msu.path.display().to_string());
        }
        args.push("--type".to_string());
        args.push(request.output_type.name.clone());
        args.push("--output".to_string());
        args.push(request.output_path.display().to_string());
        if request.empty_folder {
            args.push("--empty-folder".to_string());
        }
        if request.open_folder {
            args.push("--open-folder".to_string());
        }
        if let Some(prev) = &request.prev_msu {
            args.push("--prev".to_string());
            args.push(prev.path.display().to_string());
        }

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run("shuffle", &args)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failure_on_missing_binary() {
        let randomizer = MsuRandomizer::new("definitely-not-an-installed-binary");

        let result = randomizer.msu_types();

        assert!(matches!(result, Err(MsuServiceError::Spawn { .. })));
    }

    #[test]
    fn test_spawn_error_names_command() {
        let randomizer = MsuRandomizer::new("definitely-not-an-installed-binary");

        let err = randomizer.msu_types().unwrap_err();

        assert!(err
            .to_string()
            .contains("definitely-not-an-installed-binary"));
    }
}
