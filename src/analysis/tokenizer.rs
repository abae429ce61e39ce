// Tokenizer - punctuation stripping and whitespace splitting

use super::token::Token;

/// Marks removed from the sentence before splitting.
/// `--` is removed as a unit; a lone `-` stays part of the word.
pub const PUNCTUATION_MARKS: [&str; 9] = [",", ".", "!", "?", "`", "'", "\"", ":", "--"];

/// Removes every occurrence of every mark in `PUNCTUATION_MARKS`.
pub fn strip_punctuation(raw: &str) -> String {
    PUNCTUATION_MARKS
        .iter()
        .fold(raw.to_string(), |text, mark| text.replace(mark, ""))
}

/// Splits a sentence into tokens.
///
/// The stripped sentence is trimmed and split on single spaces without
/// collapsing, so consecutive spaces yield empty tokens and an empty sentence
/// yields exactly one empty token.
pub fn tokenize(raw: &str) -> Vec<Token> {
    strip_punctuation(raw)
        .trim()
        .split(' ')
        .map(Token::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_tokenize_empty_yields_single_empty_token() {
        assert_eq!(texts(&tokenize("")), vec![""]);
    }

    #[test]
    fn test_tokenize_only_punctuation() {
        assert_eq!(texts(&tokenize("?!...")), vec![""]);
    }

    #[test]
    fn test_tokenize_strips_comma_and_exclamation() {
        assert_eq!(texts(&tokenize("Hello, world!")), vec!["Hello", "world"]);
    }

    #[test]
    fn test_tokenize_double_space_keeps_empty_token() {
        assert_eq!(texts(&tokenize("one  two")), vec!["one", "", "two"]);
    }

    #[test]
    fn test_tokenize_double_dash_removed_as_unit() {
        assert_eq!(texts(&tokenize("a--b")), vec!["ab"]);
    }

    #[test]
    fn test_tokenize_single_dash_kept() {
        assert_eq!(texts(&tokenize("кто-то пришёл")), vec!["кто-то", "пришёл"]);
    }

    #[test]
    fn test_tokenize_triple_dash_leaves_one() {
        // "---" loses its first "--" pair only
        assert_eq!(texts(&tokenize("a---b")), vec!["a-b"]);
    }

    #[test]
    fn test_tokenize_preserves_case() {
        assert_eq!(texts(&tokenize("Кот сидит.")), vec!["Кот", "сидит"]);
    }

    #[test]
    fn test_tokenize_quotes_and_colons() {
        assert_eq!(
            texts(&tokenize("Он сказал: \"да\" и 'нет' `так`")),
            vec!["Он", "сказал", "да", "и", "нет", "так"]
        );
    }

    #[test]
    fn test_tokenize_trims_outer_whitespace() {
        assert_eq!(texts(&tokenize("  кот  ")), vec!["кот"]);
    }

    #[test]
    fn test_tokenize_tabs_are_not_separators() {
        assert_eq!(texts(&tokenize("кот\tсидит")), vec!["кот\tсидит"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        assert_eq!(texts(&tokenize("да, да, да")), vec!["да", "да", "да"]);
    }

    #[test]
    fn test_strip_punctuation_removes_all_marks() {
        assert_eq!(strip_punctuation(",.!?`'\":--"), "");
    }
}
