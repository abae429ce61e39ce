//! Morphology resolution
//!
//! Looks every token up in the dictionary, one awaited lookup at a time, and
//! accumulates the tags of each token's first meaning into a `TagMapping`.

use super::mapping::TagMapping;
use super::tag::MorphologyTag;
use super::token::Token;
use crate::dictionary::{Dictionary, DictionaryError};
use crate::engine::config::{FailurePolicy, ResolverConfig};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Lookup failed for '{token}': {source}")]
    Lookup {
        token: String,
        #[source]
        source: DictionaryError,
    },
}

/// Resolves `tokens` with the default configuration.
pub async fn resolve(
    dictionary: &dyn Dictionary,
    tokens: &[Token],
) -> Result<TagMapping, ResolveError> {
    resolve_with(dictionary, tokens, &ResolverConfig::default(), |_, _| {}).await
}

/// Resolves `tokens` in order, duplicates included.
///
/// `on_update` receives the mapping after every token together with the
/// number of tokens processed so far; the mapping it sees is the visible
/// partial state of the run. With `FailurePolicy::Abort` the first failed
/// lookup ends the run and the tokens after it are never looked up.
pub async fn resolve_with<F>(
    dictionary: &dyn Dictionary,
    tokens: &[Token],
    config: &ResolverConfig,
    mut on_update: F,
) -> Result<TagMapping, ResolveError>
where
    F: FnMut(&TagMapping, usize),
{
    let mut mapping = TagMapping::new();
    let mut memo: HashMap<&str, Vec<MorphologyTag>> = HashMap::new();

    for (index, token) in tokens.iter().enumerate() {
        let word = token.as_str();

        let tags = match memo.get(word) {
            Some(tags) if config.memoize_duplicates => tags.clone(),
            _ => match first_meaning_tags(dictionary, word).await {
                Ok(tags) => tags,
                Err(source) => match config.failure_policy {
                    FailurePolicy::Isolate => {
                        warn!("Lookup of '{}' failed, marking unknown: {}", word, source);
                        Vec::new()
                    }
                    FailurePolicy::Abort => {
                        return Err(ResolveError::Lookup {
                            token: word.to_string(),
                            source,
                        });
                    }
                },
            },
        };

        debug!("Resolved '{}' -> {:?}", word, tags);
        if config.memoize_duplicates {
            memo.insert(word, tags.clone());
        }
        mapping.set(word, tags);
        on_update(&mapping, index + 1);
    }

    Ok(mapping)
}

async fn first_meaning_tags(
    dictionary: &dyn Dictionary,
    word: &str,
) -> Result<Vec<MorphologyTag>, DictionaryError> {
    let meanings = dictionary.lookup(word).await?;
    Ok(meanings
        .into_iter()
        .next()
        .map(|meaning| meaning.morphology)
        .unwrap_or_default())
}
