use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use super::utils::deserialize_id;
use crate::scoring::{
    PartOfSpeech,
    PhraseCategory,
};

/// A song as exported from the song store: lyric lines plus an English translation aligned by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub lyrics: Vec<String>,
    #[serde(default)]
    pub translation: Vec<String>,
}

impl Song {
    pub fn translation_at(&self, line_index: usize) -> Option<&str> {
        self.translation.get(line_index).map(|line| line.trim()).filter(|line| !line.is_empty())
    }

    /// Non-empty trimmed lyric lines with their original index.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lyrics
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx, line.trim()))
            .filter(|(_, line)| !line.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPhrase {
    pub song_id: String,
    pub original_text: String,
    pub translated_text: Option<String>,
    pub line_index: usize,
    pub score: f64,
    pub category: PhraseCategory,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: PhraseCategory,
    pub display_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseExtraction {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub threshold: f64,
    pub songs_processed: usize,
    pub phrases: Vec<ExtractedPhrase>,
    pub category_counts: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub song_id: String,
    pub line_index: usize,
    pub original_text: String,
    pub translated_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedVocabulary {
    pub word: String,
    pub score: f64,
    pub frequency: f64,
    pub part_of_speech: PartOfSpeech,
    pub occurrences: usize,
    pub song_count: usize,
    pub example: Option<ExampleSentence>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyExtraction {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub limit: usize,
    pub songs_processed: usize,
    pub words: Vec<ExtractedVocabulary>,
}
