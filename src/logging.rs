use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var naming a log file; overrides `logging.file`.
pub const LOG_FILE_ENV: &str = "HEALTHHUB_LOG";

/// Build the level filter: `RUST_LOG` wins, then the configured level.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Where log lines go. `None` means stderr.
pub fn log_file(config: &LoggingConfig) -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}

/// Initialize tracing.
///
/// Falls back to stderr when the log file cannot be created. Calling this
/// twice is harmless; the second subscriber is not installed.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = build_filter(config);

    let file = match log_file(config) {
        Some(path) => match std::fs::File::create(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!(
                    "Warning: Failed to create log file {}: {}",
                    path.display(),
                    err
                );
                None
            }
        },
        None => None,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            )
            .try_init(),
        None => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            )
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
