use std::fmt;

/// Token of a submitted sentence, punctuation already stripped.
///
/// Tokens keep the casing the user typed and may be empty: an empty sentence
/// or a run of spaces produces empty tokens (see `tokenize`).
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}
