use std::{
    collections::HashSet,
    sync::Arc,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::trace;

use super::{
    categories::PhraseCategory,
    patterns::{
        CATEGORY_RULES,
        COMMON_EXPRESSIONS,
        EXCLUSIONS,
        GREETINGS,
        QUESTIONS,
    },
    tense::VerbTense,
};
use crate::{
    core::utils::{
        char_len,
        clamp_unit,
        is_word_char,
    },
    dictionary::FrequencyTable,
};

pub const USEFULNESS_THRESHOLD: f64 = 0.4;

pub const WORD_FREQUENCY_WEIGHT: f64 = 0.50;
pub const COMMON_EXPRESSION_WEIGHT: f64 = 0.30;
pub const REPETITIVENESS_WEIGHT: f64 = 0.20;

// Zipf range mapped onto [0, 1] for the word frequency factor.
const ZIPF_FLOOR: f64 = 1.0;
const ZIPF_CEILING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PhraseFactors {
    pub word_frequency: f64,
    pub phrase_length: f64,
    pub verb_complexity: f64,
    pub question_pattern: f64,
    pub greeting_pattern: f64,
    pub common_expression: f64,
    pub repetitiveness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseScore {
    pub score: f64,
    pub factors: PhraseFactors,
    pub category: PhraseCategory,
}

pub fn is_useful_phrase(score: f64) -> bool {
    score >= USEFULNESS_THRESHOLD
}

/// Ranks lyric lines by how worthwhile they are to teach as a phrase.
pub struct PhraseScorer {
    frequencies: Arc<FrequencyTable>,
}

impl PhraseScorer {
    pub fn new(frequencies: Arc<FrequencyTable>) -> Self {
        Self { frequencies }
    }

    pub fn score(&self, phrase: &str, verb_tenses: Option<&[VerbTense]>) -> PhraseScore {
        let phrase = phrase.trim();

        let word_frequency = self.word_frequency_score(phrase);
        let common_expression = common_expression_score(phrase);
        let repetitiveness = repetitiveness_score(phrase);

        // Computed for inspection only: the shipped formula leaves these out of the score.
        let phrase_length = phrase_length_score(phrase);
        let verb_complexity = verb_complexity_score(verb_tenses);
        let question_pattern = if QUESTIONS.is_match(phrase) { 1.0 } else { 0.0 };
        let greeting_pattern = if GREETINGS.is_match(phrase) { 1.0 } else { 0.0 };
        trace!(
            phrase,
            phrase_length,
            verb_complexity,
            question_pattern,
            greeting_pattern,
            "unweighted phrase factors"
        );

        let factors = PhraseFactors {
            word_frequency,
            phrase_length: 0.0,
            verb_complexity: 0.0,
            question_pattern: 0.0,
            greeting_pattern: 0.0,
            common_expression,
            repetitiveness,
        };

        let score = clamp_unit(
            WORD_FREQUENCY_WEIGHT * word_frequency
                + COMMON_EXPRESSION_WEIGHT * common_expression
                + REPETITIVENESS_WEIGHT * repetitiveness,
        );

        PhraseScore { score, factors, category: categorize(phrase, common_expression) }
    }

    /// Average Zipf frequency of the real words in the phrase, rescaled from [1, 5] to [0, 1].
    pub fn word_frequency_score(&self, phrase: &str) -> f64 {
        let frequencies: Vec<f64> = phrase
            .split_whitespace()
            .filter(|token| char_len(token) > 1)
            .filter(|token| token.chars().next().map_or(false, is_word_char))
            .map(|token| self.frequencies.zipf(token).unwrap_or_else(|| estimate_zipf(token)))
            .collect();

        if frequencies.is_empty() {
            return 0.0;
        }

        let average = frequencies.iter().sum::<f64>() / frequencies.len() as f64;
        clamp_unit((average - ZIPF_FLOOR) / (ZIPF_CEILING - ZIPF_FLOOR))
    }
}

/// Length-based guess for words missing from the frequency table: short words tend to be common.
pub fn estimate_zipf(word: &str) -> f64 {
    match char_len(word) {
        0..=3 => 3.0,
        4..=5 => 2.0,
        6..=8 => 1.0,
        _ => 0.5,
    }
}

pub fn common_expression_score(phrase: &str) -> f64 {
    if COMMON_EXPRESSIONS.is_match(phrase) {
        1.0
    } else {
        0.0
    }
}

/// Share of distinct words; filler lines are zeroed outright.
pub fn repetitiveness_score(phrase: &str) -> f64 {
    if EXCLUSIONS.is_match(phrase) {
        return 0.0;
    }

    let lowered = phrase.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let unique: HashSet<&str> = words.iter().copied().collect();
    clamp_unit(unique.len() as f64 / words.len() as f64)
}

pub fn phrase_length_score(phrase: &str) -> f64 {
    match phrase.split_whitespace().count() {
        0 => 0.0,
        3..=8 => 1.0,
        2 | 9..=12 => 0.6,
        _ => 0.2,
    }
}

pub fn verb_complexity_score(verb_tenses: Option<&[VerbTense]>) -> f64 {
    match verb_tenses {
        Some(tenses) if !tenses.is_empty() => {
            let total: f64 = tenses.iter().map(VerbTense::simplicity).sum();
            clamp_unit(total / tenses.len() as f64)
        }
        _ => 0.5,
    }
}

/// First matching rule wins; `expressions` only when nothing more specific matched.
pub fn categorize(phrase: &str, common_expression: f64) -> PhraseCategory {
    if let Some(rule) = CATEGORY_RULES.iter().find(|rule| rule.patterns.is_match(phrase)) {
        return rule.category;
    }

    if common_expression > 0.5 {
        PhraseCategory::Expressions
    } else {
        PhraseCategory::Vocabulary
    }
}
