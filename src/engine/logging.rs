use crate::engine::config::LogConfig;
use crate::engine::error::TextscanError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding `LogConfig::filter`
pub const LOG_ENV: &str = "TEXTSCAN_LOG";

/// Installs the global subscriber writing to `config.file`.
///
/// Logs never go to stdout or stderr: both belong to the terminal UI.
pub fn init(config: &LogConfig) -> Result<(), TextscanError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| TextscanError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TextscanError::Logging(e.to_string()))
}
