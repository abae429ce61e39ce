use crate::analysis::ResolveError;
use crate::dictionary::DictionaryError;
use crate::engine::config::ConfigError;
use std::io;
use thiserror::Error;

/// Top-level error of the textscan binary
#[derive(Error, Debug)]
pub enum TextscanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
