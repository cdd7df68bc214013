use std::{
    cmp::Ordering,
    collections::HashSet,
    sync::Arc,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::pos::{
    infer_part_of_speech,
    PartOfSpeech,
};
use crate::{
    core::utils::{
        char_len,
        clamp_unit,
        normalize_word,
    },
    dictionary::{
        is_basic_verb,
        is_stopword,
        FrequencyTable,
    },
};

pub const VOCABULARY_THRESHOLD: f64 = 0.4;
/// Entries at or below this never make it into a ranked list.
pub const RANKING_FLOOR: f64 = 0.3;
pub const DEFAULT_VOCABULARY_LIMIT: usize = 100;

pub const MIN_WORD_LENGTH: usize = 3;
/// Zipf assumed for words the table doesn't know.
pub const UNKNOWN_WORD_ZIPF: f64 = 1.0;

pub const FREQUENCY_WEIGHT: f64 = 0.6;
pub const POS_WEIGHT: f64 = 0.3;

const OPTIMAL_ZIPF: f64 = 3.5;
const OPTIMAL_BAND_LOW: f64 = 2.0;
const OPTIMAL_BAND_HIGH: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyScore {
    pub word: String,
    pub score: f64,
    pub frequency: f64,
    pub part_of_speech: PartOfSpeech,
}

pub fn is_useful_vocabulary(score: f64) -> bool {
    score >= VOCABULARY_THRESHOLD
}

/// Spanish letters only, checked on the normalized (lowercase) form.
pub fn is_spanish_word(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| matches!(c, 'a'..='z' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | 'ü'))
}

/// Whether a normalized word may receive a score at all.
pub fn is_eligible(word: &str) -> bool {
    !is_stopword(word)
        && !is_basic_verb(word)
        && char_len(word) >= MIN_WORD_LENGTH
        && is_spanish_word(word)
}

/// Peaks at Zipf 3.5: common enough to be useful, rare enough to be worth teaching.
pub fn frequency_optimality(zipf: f64) -> f64 {
    if zipf > OPTIMAL_BAND_HIGH {
        (0.3 - (zipf - OPTIMAL_BAND_HIGH) * 0.1).max(0.0)
    } else if zipf < OPTIMAL_BAND_LOW {
        (0.4 - (OPTIMAL_BAND_LOW - zipf) * 0.2).max(0.0)
    } else {
        (1.0 - (zipf - OPTIMAL_ZIPF).abs() / 1.5).max(0.0)
    }
}

pub fn length_bonus(word: &str) -> f64 {
    let extra = char_len(word).saturating_sub(MIN_WORD_LENGTH) as f64;
    (extra * 0.02).min(0.2)
}

pub struct VocabularyScorer {
    frequencies: Arc<FrequencyTable>,
}

impl VocabularyScorer {
    pub fn new(frequencies: Arc<FrequencyTable>) -> Self {
        Self { frequencies }
    }

    /// `None` means "not eligible", not a failure.
    pub fn score_word(&self, word: &str) -> Option<VocabularyScore> {
        let word = normalize_word(word);
        if !is_eligible(&word) {
            return None;
        }

        let frequency = self.frequencies.zipf(&word).unwrap_or(UNKNOWN_WORD_ZIPF);
        let part_of_speech = infer_part_of_speech(&word);

        let score = clamp_unit(
            FREQUENCY_WEIGHT * frequency_optimality(frequency)
                + POS_WEIGHT * part_of_speech.weight()
                + length_bonus(&word),
        );

        Some(VocabularyScore { word, score, frequency, part_of_speech })
    }

    /// Dedupe by normalized form, drop weak entries, best `limit` first.
    /// Ties keep first-seen order.
    pub fn top_vocabulary<I, S>(&self, words: I, limit: usize) -> Vec<VocabularyScore>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut scored: Vec<VocabularyScore> = words
            .into_iter()
            .filter(|word| seen.insert(normalize_word(word.as_ref())))
            .filter_map(|word| self.score_word(word.as_ref()))
            .filter(|entry| entry.score > RANKING_FLOOR)
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(limit);
        scored
    }
}
