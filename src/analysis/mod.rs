pub mod mapping;
pub mod resolver;
pub mod session;
pub mod tag;
pub mod token;
pub mod tokenizer;

pub use mapping::{TagEntry, TagMapping};
pub use resolver::{resolve, resolve_with, ResolveError};
pub use session::{ResolutionSnapshot, ResolutionStatus, Session};
pub use tag::{reference_link, MorphologyTag, NOUN_REFERENCE_URL};
pub use token::Token;
pub use tokenizer::{strip_punctuation, tokenize, PUNCTUATION_MARKS};
