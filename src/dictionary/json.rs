use super::{Dictionary, DictionaryError, Meaning, MemoryDictionary};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Dictionary bundled as a JSON file.
///
/// Format: an object keyed by word form, each value an ordered list of
/// meanings:
///
/// ```json
/// { "кот": [ { "lemma": "кот", "morphology": ["Noun", "Masculine"] } ] }
/// ```
#[derive(Debug, Clone)]
pub struct JsonDictionary {
    inner: MemoryDictionary,
}

impl JsonDictionary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DictionaryError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::from_json(&content, &path.display().to_string())?;
        info!(
            "Loaded dictionary {} with {} word forms",
            path.display(),
            dictionary.inner.len()
        );
        Ok(dictionary)
    }

    pub fn from_json(content: &str, name: &str) -> Result<Self, DictionaryError> {
        let entries: HashMap<String, Vec<Meaning>> =
            serde_json::from_str(content).map_err(|e| DictionaryError::Parse(e.to_string()))?;
        Ok(Self {
            inner: MemoryDictionary::from_entries(name, entries),
        })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl Dictionary for JsonDictionary {
    async fn lookup(&self, word: &str) -> Result<Vec<Meaning>, DictionaryError> {
        self.inner.lookup(word).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
