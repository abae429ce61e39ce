pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, FailurePolicy};
pub use error::TextscanError;
