//! Morphology tags and their reference links
//!
//! Tags are the grammatical categories the dictionary attaches to a word
//! meaning. The set mirrors the grammemes of the bundled Russian dictionary;
//! the analysis core only compares tags by name.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Article on nouns ("Имя существительное") in the Russian Wikipedia.
pub const NOUN_REFERENCE_URL: &str = "https://ru.wikipedia.org/wiki/%D0%98%D0%BC%D1%8F_%D1%81%D1%83%D1%89%D0%B5%D1%81%D1%82%D0%B2%D0%B8%D1%82%D0%B5%D0%BB%D1%8C%D0%BD%D0%BE%D0%B5#:~:text=%D0%98%CC%81%D0%BC%D1%8F%20%D1%81%D1%83%D1%89%D0%B5%D1%81%D1%82%D0%B2%D0%B8%CC%81%D1%82%D0%B5%D0%BB%D1%8C%D0%BD%D0%BE%D0%B5%20(%D0%B8%D0%BB%D0%B8%20%D0%BF%D1%80%D0%BE%D1%81%D1%82%D0%BE%20%D1%81%D1%83%D1%89%D0%B5%D1%81%D1%82%D0%B2%D0%B8%CC%81%D1%82%D0%B5%D0%BB%D1%8C%D0%BD%D0%BE%D0%B5),%D0%BD%D0%B0%20%D0%B2%D0%BE%D0%BF%D1%80%D0%BE%D1%81%D1%8B%20%C2%AB%D0%BA%D1%82%D0%BE%3F%C2%BB%20%D0%B8%D0%BB%D0%B8%20%C2%AB%D1%87%D1%82%D0%BE%3F%C2%BB";

macro_rules! morphology_tags {
    ($($variant:ident),+ $(,)?) => {
        /// Grammatical category attached to a dictionary meaning.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum MorphologyTag {
            $($variant),+
        }

        impl MorphologyTag {
            pub const ALL: &'static [MorphologyTag] = &[$(MorphologyTag::$variant),+];

            /// Identifier of the tag, e.g. `"Noun"` or `"FirstPerson"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(MorphologyTag::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

morphology_tags! {
    // parts of speech
    Noun,
    Adjective,
    Verb,
    Infinitive,
    Participle,
    ShortParticiple,
    AdverbialParticiple,
    ShortAdjective,
    Pronoun,
    PronounAdjective,
    PronounPredicative,
    NumeralQuantitative,
    NumeralOrdinal,
    Adverb,
    Predicative,
    Preposition,
    Conjunction,
    Interjection,
    Particle,
    IntroductoryWord,
    // number
    Singular,
    Plural,
    // case
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
    Vocative,
    // gender
    Masculine,
    Feminine,
    Neuter,
    MasculineFeminine,
    // tense
    Present,
    Past,
    Future,
    // person
    FirstPerson,
    SecondPerson,
    ThirdPerson,
    // mood and voice
    Imperative,
    ActiveVoice,
    PassiveVoice,
    // aspect and transitivity
    Perfective,
    Imperfective,
    Transitive,
    Intransitive,
    // animacy
    Animated,
    Inanimate,
    // degree
    Comparative,
    Superlative,
    // lexical marks
    Indeclinable,
    Name,
    Surname,
    Patronymic,
    Toponym,
    Colloquial,
    Archaism,
}

lazy_static! {
    static ref TAGS_BY_NAME: HashMap<&'static str, MorphologyTag> = MorphologyTag::ALL
        .iter()
        .map(|tag| (tag.name(), *tag))
        .collect();
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown morphology tag: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for MorphologyTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TAGS_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl fmt::Display for MorphologyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Link opened when a tag is activated in the analysis view.
///
/// Only nouns have a reference article so far. `FirstPerson` is routed
/// explicitly to an empty target; more tags get their own arm as articles
/// are chosen. An empty string means "no reference".
pub fn reference_link(tag: &MorphologyTag) -> &'static str {
    match tag.name() {
        "Noun" => NOUN_REFERENCE_URL,
        "FirstPerson" => "",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_link_noun() {
        assert_eq!(reference_link(&MorphologyTag::Noun), NOUN_REFERENCE_URL);
        assert!(NOUN_REFERENCE_URL.starts_with("https://ru.wikipedia.org/wiki/"));
    }

    #[test]
    fn test_reference_link_first_person_is_empty() {
        assert_eq!(reference_link(&MorphologyTag::FirstPerson), "");
    }

    #[test]
    fn test_reference_link_only_noun_has_target() {
        let linked: Vec<_> = MorphologyTag::ALL
            .iter()
            .filter(|tag| !reference_link(tag).is_empty())
            .collect();
        assert_eq!(linked, vec![&MorphologyTag::Noun]);
    }

    #[test]
    fn test_name_matches_display() {
        assert_eq!(MorphologyTag::FirstPerson.name(), "FirstPerson");
        assert_eq!(MorphologyTag::Noun.to_string(), "Noun");
    }

    #[test]
    fn test_from_str_known_tag() {
        assert_eq!("Verb".parse::<MorphologyTag>(), Ok(MorphologyTag::Verb));
    }

    #[test]
    fn test_from_str_unknown_tag() {
        assert_eq!(
            "Gerundive".parse::<MorphologyTag>(),
            Err(UnknownTag("Gerundive".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_tag_name() {
        let json = serde_json::to_string(&MorphologyTag::Genitive).unwrap();
        assert_eq!(json, "\"Genitive\"");
        let tag: MorphologyTag = serde_json::from_str("\"Plural\"").unwrap();
        assert_eq!(tag, MorphologyTag::Plural);
    }
}
