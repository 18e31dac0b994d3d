//! Process-wide logging: console plus a daily-rolling file.
//!
//! Log files land under `{local data dir}/rom-launcher/` and roll daily,
//! keeping the most recent 30. The returned guard owns the background file
//! writer; `main` holds it so buffered lines are flushed when the process
//! exits.

use std::path::PathBuf;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR_NAME: &str = "rom-launcher";
const LOG_FILE_PREFIX: &str = "rom-launcher";
const RETAINED_LOG_FILES: usize = 30;

/// Directory the rolling log files are written to, when resolvable.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR_NAME))
}

/// Initialize the global subscriber. Call once at process start.
///
/// When the log directory cannot be resolved or created, logging degrades
/// to console only and a warning is emitted.
pub fn init() -> Option<WorkerGuard> {
    let file_appender = log_dir().and_then(|dir| {
        tracing_appender::rolling::Builder::new()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix("log")
            .max_log_files(RETAINED_LOG_FILES)
            .build(dir)
            .ok()
    });

    let (file_layer, guard) = match file_appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(fmt::layer().with_target(false).without_time())
        .with(file_layer)
        .init();

    if guard.is_none() {
        warn!("Could not set up the log file; logging to console only");
    }

    guard
}
