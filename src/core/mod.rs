pub mod errors;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use errors::LetrasError;
pub use models::{
    CategoryCount,
    ExampleSentence,
    ExtractedPhrase,
    ExtractedVocabulary,
    PhraseExtraction,
    Song,
    VocabularyExtraction,
};
