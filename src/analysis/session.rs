//! Analysis session
//!
//! Owns the resolution task of the current sentence and publishes its
//! progress through a `watch` channel. The running task is the only writer
//! of the mapping; the presentation side holds receivers and reads
//! snapshots. Submitting a new sentence aborts the task of the previous one
//! and starts from an empty mapping.

use super::mapping::TagMapping;
use super::resolver::resolve_with;
use super::token::Token;
use super::tokenizer::tokenize;
use crate::dictionary::Dictionary;
use crate::engine::config::ResolverConfig;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionStatus {
    Idle,
    Resolving { done: usize, total: usize },
    Settled,
    Failed(String),
    Cancelled,
}

impl ResolutionStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, ResolutionStatus::Resolving { .. })
    }
}

/// State of the current (or last) sentence as seen by the presentation.
#[derive(Debug, Clone)]
pub struct ResolutionSnapshot {
    /// Bumped on every submission; updates from older runs are dropped.
    pub generation: u64,
    pub sentence: String,
    pub tokens: Vec<Token>,
    pub mapping: TagMapping,
    pub status: ResolutionStatus,
}

impl ResolutionSnapshot {
    fn idle() -> Self {
        Self {
            generation: 0,
            sentence: String::new(),
            tokens: Vec::new(),
            mapping: TagMapping::new(),
            status: ResolutionStatus::Idle,
        }
    }
}

pub struct Session {
    dictionary: Arc<dyn Dictionary>,
    config: ResolverConfig,
    runtime: Handle,
    state: Arc<watch::Sender<ResolutionSnapshot>>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl Session {
    pub fn new(dictionary: Arc<dyn Dictionary>, config: ResolverConfig, runtime: Handle) -> Self {
        let (state, _) = watch::channel(ResolutionSnapshot::idle());
        Self {
            dictionary,
            config,
            runtime,
            state: Arc::new(state),
            task: None,
            generation: 0,
        }
    }

    /// Session on the runtime of the calling task.
    ///
    /// Panics outside a tokio runtime, like `tokio::spawn`.
    pub fn on_current_runtime(dictionary: Arc<dyn Dictionary>, config: ResolverConfig) -> Self {
        Self::new(dictionary, config, Handle::current())
    }

    pub fn dictionary_name(&self) -> &str {
        self.dictionary.name()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResolutionSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ResolutionSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_resolving(&self) -> bool {
        !self.state.borrow().status.is_finished()
    }

    /// Tokenizes `raw` and starts resolving it, replacing any earlier run.
    ///
    /// Returns the generation of the new run.
    pub fn submit(&mut self, raw: &str) -> u64 {
        self.abort_task();

        self.generation += 1;
        let generation = self.generation;
        let tokens = tokenize(raw);
        let total = tokens.len();
        info!(
            "Submitting sentence #{} with {} tokens to {}",
            generation,
            total,
            self.dictionary.name()
        );

        self.state.send_replace(ResolutionSnapshot {
            generation,
            sentence: raw.to_string(),
            tokens: tokens.clone(),
            mapping: TagMapping::new(),
            status: ResolutionStatus::Resolving { done: 0, total },
        });

        let dictionary = Arc::clone(&self.dictionary);
        let config = self.config.clone();
        let state = Arc::clone(&self.state);

        self.task = Some(self.runtime.spawn(async move {
            let result = resolve_with(dictionary.as_ref(), &tokens, &config, |mapping, done| {
                publish(&state, generation, |snapshot| {
                    snapshot.mapping = mapping.clone();
                    snapshot.status = ResolutionStatus::Resolving { done, total };
                });
            })
            .await;

            let status = match result {
                Ok(mapping) => {
                    info!("Sentence #{} settled with {} entries", generation, mapping.len());
                    ResolutionStatus::Settled
                }
                Err(e) => {
                    warn!("Sentence #{} failed: {}", generation, e);
                    ResolutionStatus::Failed(e.to_string())
                }
            };
            publish(&state, generation, |snapshot| snapshot.status = status);
        }));

        generation
    }

    /// Stops the in-flight run, keeping whatever it has resolved so far.
    pub fn cancel(&mut self) {
        if self.abort_task() {
            let generation = self.generation;
            publish(&self.state, generation, |snapshot| {
                if !snapshot.status.is_finished() {
                    snapshot.status = ResolutionStatus::Cancelled;
                }
            });
        }
    }

    /// Waits until the current run has settled, failed or been cancelled.
    pub async fn wait_finished(&self) -> ResolutionSnapshot {
        let mut receiver = self.subscribe();
        let result = receiver
            .wait_for(|snapshot| snapshot.status.is_finished())
            .await
            .map(|snapshot| snapshot.clone());
        // the sender lives in `self`, so the channel cannot close here
        result.unwrap_or_else(|_| self.snapshot())
    }

    fn abort_task(&mut self) -> bool {
        match self.task.take() {
            Some(task) if !task.is_finished() => {
                info!("Cancelling resolution of sentence #{}", self.generation);
                task.abort();
                true
            }
            _ => false,
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn publish<F>(state: &watch::Sender<ResolutionSnapshot>, generation: u64, update: F)
where
    F: FnOnce(&mut ResolutionSnapshot),
{
    state.send_if_modified(|snapshot| {
        if snapshot.generation != generation {
            return false;
        }
        update(snapshot);
        true
    });
}
