use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::utils::char_len;

/// Closed set of tags. The suffix classifier only ever produces noun, verb, adjective or adverb;
/// the remaining variants keep their weights because display code still colour-codes them.
#[derive(PartialEq, Clone, Copy, Debug, Hash, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Pronoun,
    Article,
    #[default]
    Other,
}

impl PartOfSpeech {
    pub fn weight(&self) -> f64 {
        match self {
            PartOfSpeech::Noun => 1.0,
            PartOfSpeech::Verb => 0.9,
            PartOfSpeech::Adjective => 0.8,
            PartOfSpeech::Adverb => 0.6,
            PartOfSpeech::Preposition => 0.3,
            PartOfSpeech::Conjunction => 0.2,
            PartOfSpeech::Pronoun => 0.1,
            PartOfSpeech::Article => 0.0,
            PartOfSpeech::Other => 0.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Article => "article",
            PartOfSpeech::Other => "other",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct SuffixRule {
    pub name: &'static str,
    pub suffixes: &'static [&'static str],
    /// The word must be strictly longer than this many characters.
    pub longer_than: usize,
    pub pos: PartOfSpeech,
}

impl SuffixRule {
    pub fn matches(&self, word: &str) -> bool {
        char_len(word) > self.longer_than && self.suffixes.iter().any(|suffix| word.ends_with(suffix))
    }
}

/**
 * Morphological guesses, checked in order; the first hit wins. Note that every `-mente` word
 * also ends in `-ente`, so the adjective rule claims those before the adverb rule sees them.
 */
pub const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule {
        name: "Infinitive ending",
        suffixes: &["ar", "er", "ir"],
        longer_than: 3,
        pos: PartOfSpeech::Verb,
    },
    SuffixRule {
        name: "Adjective ending",
        suffixes: &["oso", "osa", "able", "ible", "ante", "ente", "iente"],
        longer_than: 0,
        pos: PartOfSpeech::Adjective,
    },
    SuffixRule {
        name: "Adverb ending",
        suffixes: &["mente"],
        longer_than: 5,
        pos: PartOfSpeech::Adverb,
    },
    SuffixRule {
        name: "Noun-forming ending",
        suffixes: &["ción", "sión", "dad", "tad", "tud", "umbre", "anza", "encia", "miento", "amiento"],
        longer_than: 0,
        pos: PartOfSpeech::Noun,
    },
];

/// Guess the part of speech of a normalized word. Falls back to `Noun`, never `Other`.
pub fn infer_part_of_speech(word: &str) -> PartOfSpeech {
    infer_with_rules(word, SUFFIX_RULES)
}

pub fn infer_with_rules(word: &str, rules: &[SuffixRule]) -> PartOfSpeech {
    rules.iter().find(|rule| rule.matches(word)).map(|rule| rule.pos).unwrap_or(PartOfSpeech::Noun)
}
