use super::{Dictionary, DictionaryError, Meaning};
use crate::analysis::MorphologyTag::{self, *};
use async_trait::async_trait;
use std::collections::HashMap;

/// Word table held in memory.
///
/// Words are stored lowercase. A lookup tries the word as given first and
/// then its lowercase form, so "Кот" at the start of a sentence still finds
/// "кот".
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionary {
    name: String,
    entries: HashMap<String, Vec<Meaning>>,
}

impl MemoryDictionary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Builds the table from word forms in any casing.
    ///
    /// Forms that differ only in case ("Орёл", "орёл") share one lowercase
    /// entry; their meanings are merged in key order, so the result does not
    /// depend on the iteration order of `entries`.
    pub fn from_entries(name: impl Into<String>, entries: HashMap<String, Vec<Meaning>>) -> Self {
        let mut sorted: Vec<(String, Vec<Meaning>)> = entries.into_iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut dictionary = Self::new(name);
        for (word, meanings) in sorted {
            dictionary
                .entries
                .entry(word.to_lowercase())
                .or_default()
                .extend(meanings);
        }
        dictionary
    }

    /// Appends a meaning to the meanings already known for `word`.
    pub fn insert(&mut self, word: &str, meaning: Meaning) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(meaning);
    }

    pub fn with_entry(mut self, word: &str, morphology: Vec<MorphologyTag>) -> Self {
        self.insert(word, Meaning::new(morphology));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn meanings(&self, word: &str) -> Vec<Meaning> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .cloned()
            .unwrap_or_default()
    }

    /// Small built-in dictionary used when no dictionary file is configured.
    pub fn sample() -> Self {
        let mut dictionary = Self::new("sample");
        let words: [(&str, &str, &[MorphologyTag]); 14] = [
            ("кот", "кот", &[Noun, Animated, Masculine, Singular, Nominative]),
            ("кошка", "кошка", &[Noun, Animated, Feminine, Singular, Nominative]),
            ("мама", "мама", &[Noun, Animated, Feminine, Singular, Nominative]),
            ("рама", "рама", &[Noun, Inanimate, Feminine, Singular, Nominative]),
            ("раму", "рама", &[Noun, Inanimate, Feminine, Singular, Accusative]),
            ("окне", "окно", &[Noun, Inanimate, Neuter, Singular, Prepositional]),
            ("сидит", "сидеть", &[Verb, Imperfective, Intransitive, Present, ThirdPerson, Singular]),
            ("мыла", "мыть", &[Verb, Imperfective, Transitive, Past, Feminine, Singular]),
            ("читаю", "читать", &[Verb, Imperfective, Transitive, Present, FirstPerson, Singular]),
            ("я", "я", &[Pronoun, FirstPerson, Singular, Nominative]),
            ("на", "на", &[Preposition]),
            ("и", "и", &[Conjunction]),
            ("быстро", "быстрый", &[ShortAdjective, Neuter, Singular]),
            ("красивый", "красивый", &[Adjective, Masculine, Singular, Nominative]),
        ];
        for (word, lemma, tags) in words {
            dictionary.insert(word, Meaning::new(tags.to_vec()).with_lemma(lemma));
        }
        // second reading: "мыла" is also a form of the noun "мыло"
        dictionary.insert(
            "мыла",
            Meaning::new(vec![Noun, Inanimate, Neuter, Singular, Genitive]).with_lemma("мыло"),
        );
        // "быстро" is an adverb as well
        dictionary.insert("быстро", Meaning::new(vec![Adverb]).with_lemma("быстро"));
        dictionary
    }
}

#[async_trait]
impl Dictionary for MemoryDictionary {
    async fn lookup(&self, word: &str) -> Result<Vec<Meaning>, DictionaryError> {
        Ok(self.meanings(word))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_known_word() {
        let dictionary = MemoryDictionary::sample();
        let meanings = dictionary.lookup("кот").await.unwrap();
        assert_eq!(meanings.len(), 1);
        assert_eq!(meanings[0].morphology[0], Noun);
        assert_eq!(meanings[0].lemma.as_deref(), Some("кот"));
    }

    #[tokio::test]
    async fn test_lookup_falls_back_to_lowercase() {
        let dictionary = MemoryDictionary::sample();
        let meanings = dictionary.lookup("Кот").await.unwrap();
        assert_eq!(meanings.len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_unknown_word_is_empty() {
        let dictionary = MemoryDictionary::sample();
        assert!(dictionary.lookup("бармаглот").await.unwrap().is_empty());
        assert!(dictionary.lookup("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_meanings_keep_insertion_order() {
        let dictionary = MemoryDictionary::sample();
        let meanings = dictionary.lookup("мыла").await.unwrap();
        assert_eq!(meanings.len(), 2);
        assert_eq!(meanings[0].morphology[0], Verb);
        assert_eq!(meanings[1].morphology[0], Noun);
    }

    #[test]
    fn test_from_entries_merges_case_variants() {
        let mut entries = HashMap::new();
        entries.insert(
            "Орёл".to_string(),
            vec![Meaning::new(vec![Noun, Toponym]).with_lemma("Орёл")],
        );
        entries.insert(
            "орёл".to_string(),
            vec![Meaning::new(vec![Noun, Animated]).with_lemma("орёл")],
        );

        let dictionary = MemoryDictionary::from_entries("merged", entries);
        assert_eq!(dictionary.len(), 1);

        let meanings = dictionary.meanings("орёл");
        assert_eq!(meanings.len(), 2);
        // "Орёл" sorts before "орёл"
        assert_eq!(meanings[0].morphology, vec![Noun, Toponym]);
        assert_eq!(meanings[1].morphology, vec![Noun, Animated]);
        assert_eq!(dictionary.meanings("Орёл"), meanings);
    }

    #[test]
    fn test_with_entry_builder() {
        let dictionary = MemoryDictionary::new("test")
            .with_entry("Дом", vec![Noun])
            .with_entry("дом", vec![Noun, Inanimate]);
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.meanings("дом").len(), 2);
        assert_eq!(dictionary.name, "test");
    }
}
