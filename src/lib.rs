pub mod core;
pub mod dictionary;
pub mod persistence;
pub mod scoring;

pub use crate::core::LetrasError;
pub use dictionary::FrequencyTable;
pub use scoring::{
    is_useful_phrase,
    is_useful_vocabulary,
    PartOfSpeech,
    PhraseCategory,
    PhraseScore,
    PhraseScorer,
    VerbTense,
    VocabularyScore,
    VocabularyScorer,
    PHRASE_CATEGORIES,
    USEFULNESS_THRESHOLD,
    VOCABULARY_THRESHOLD,
};
