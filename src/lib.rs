//! textscan: Russian sentence morphology in the terminal
//!
//! A sentence is stripped of punctuation, split into tokens, and every token
//! is looked up in a morphology dictionary. The tags of each token's first
//! meaning are shown as they resolve.

pub mod analysis;
pub mod app;
pub mod dictionary;
pub mod engine;
pub mod ui;

pub use analysis::{reference_link, resolve, tokenize, MorphologyTag, Session, TagMapping, Token};
pub use dictionary::{Dictionary, JsonDictionary, Meaning, MemoryDictionary};
