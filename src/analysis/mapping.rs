use super::tag::MorphologyTag;

/// One row of the analysis: a token and the tags of its first meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub token: String,
    pub tags: Vec<MorphologyTag>,
}

impl TagEntry {
    /// An empty tag list means the dictionary does not know the word.
    pub fn is_unknown(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Ordered token → tags mapping built by one resolution run.
///
/// Keys keep the position of their first insertion; setting an existing key
/// replaces its tags in place, so the last resolved occurrence of a repeated
/// token wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMapping {
    entries: Vec<TagEntry>,
}

impl TagMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, token: impl Into<String>, tags: Vec<MorphologyTag>) {
        let token = token.into();
        match self.entries.iter_mut().find(|entry| entry.token == token) {
            Some(entry) => entry.tags = tags,
            None => self.entries.push(TagEntry { token, tags }),
        }
    }

    pub fn get(&self, token: &str) -> Option<&[MorphologyTag]> {
        self.entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.tags.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagEntry> {
        self.entries.iter()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.token.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a TagMapping {
    type Item = &'a TagEntry;
    type IntoIter = std::slice::Iter<'a, TagEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MorphologyTag::*;

    #[test]
    fn test_set_appends_in_insertion_order() {
        let mut mapping = TagMapping::new();
        mapping.set("Кот", vec![Noun]);
        mapping.set("сидит", vec![Verb]);
        assert_eq!(mapping.tokens().collect::<Vec<_>>(), vec!["Кот", "сидит"]);
    }

    #[test]
    fn test_set_existing_key_overwrites_in_place() {
        let mut mapping = TagMapping::new();
        mapping.set("мама", vec![Noun]);
        mapping.set("мыла", vec![Verb]);
        mapping.set("мама", vec![Noun, Feminine]);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.tokens().collect::<Vec<_>>(), vec!["мама", "мыла"]);
        assert_eq!(mapping.get("мама"), Some(&[Noun, Feminine][..]));
    }

    #[test]
    fn test_empty_tags_mark_unknown() {
        let mut mapping = TagMapping::new();
        mapping.set("бармаглот", vec![]);
        let entry = mapping.iter().next().unwrap();
        assert!(entry.is_unknown());
        assert_eq!(mapping.get("бармаглот"), Some(&[][..]));
    }

    #[test]
    fn test_get_missing_key() {
        let mapping = TagMapping::new();
        assert_eq!(mapping.get("нет"), None);
    }

    #[test]
    fn test_clear() {
        let mut mapping = TagMapping::new();
        mapping.set("кот", vec![Noun]);
        mapping.clear();
        assert!(mapping.is_empty());
    }
}
