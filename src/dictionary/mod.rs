//! Dictionary module
//!
//! The morphology dictionary is an opaque lookup service: a word goes in,
//! an ordered list of candidate meanings comes out.
//!
//! ## Module Structure
//!
//! - **memory.rs**: In-process word table, also used for the built-in sample
//! - **json.rs**: Bundled dictionary loaded from a JSON file

use crate::analysis::MorphologyTag;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub mod json;
pub mod memory;

pub use json::JsonDictionary;
pub use memory::MemoryDictionary;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),

    #[error("Dictionary I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dictionary parse error: {0}")]
    Parse(String),

    #[error("Dictionary unavailable: {0}")]
    Unavailable(String),
}

/// One candidate interpretation of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub lemma: Option<String>,
    pub morphology: Vec<MorphologyTag>,
}

impl Meaning {
    pub fn new(morphology: Vec<MorphologyTag>) -> Self {
        Self {
            lemma: None,
            morphology,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }
}

/// Lookup service consulted once per token.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Candidate meanings of `word`, most likely first. An unknown word
    /// yields an empty list, not an error.
    async fn lookup(&self, word: &str) -> Result<Vec<Meaning>, DictionaryError>;

    fn name(&self) -> &str;
}
