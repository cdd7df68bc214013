pub mod categories;

pub mod patterns;

pub mod phrase;

pub mod pos;

pub mod tense;

pub mod vocabulary;

pub use categories::{
    CategoryInfo,
    PhraseCategory,
    PHRASE_CATEGORIES,
};
pub use phrase::{
    is_useful_phrase,
    PhraseFactors,
    PhraseScore,
    PhraseScorer,
    USEFULNESS_THRESHOLD,
};
pub use pos::PartOfSpeech;
pub use tense::VerbTense;
pub use vocabulary::{
    is_useful_vocabulary,
    VocabularyScore,
    VocabularyScorer,
    DEFAULT_VOCABULARY_LIMIT,
    VOCABULARY_THRESHOLD,
};

#[cfg(test)]

mod scoring_tests;
