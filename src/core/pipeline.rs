use std::{
    collections::{
        HashMap,
        HashSet,
    },
    fs,
    path::Path,
    time::Instant,
};

use chrono::Utc;
use rayon::prelude::*;
use tracing::{
    debug,
    info,
    warn,
};
use uuid::Uuid;

use super::{
    utils::{
        normalize_word,
        strip_edge_punctuation,
    },
    CategoryCount,
    ExampleSentence,
    ExtractedPhrase,
    ExtractedVocabulary,
    LetrasError,
    PhraseExtraction,
    Song,
    VocabularyExtraction,
};
use crate::scoring::{
    PhraseScorer,
    VocabularyScorer,
    PHRASE_CATEGORIES,
};

/// Parse a songs file. Validation happens once, in the extraction jobs.
pub fn load_songs(path: &Path) -> Result<Vec<Song>, LetrasError> {
    let json = fs::read_to_string(path)?;
    let songs: Vec<Song> = serde_json::from_str(&json)?;
    info!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

pub fn validate_songs(songs: &[Song]) -> Result<(), LetrasError> {
    for (idx, song) in songs.iter().enumerate() {
        if song.id.is_empty() {
            return Err(LetrasError::InvalidSong(format!("song #{} has an empty id", idx)));
        }
        if song.translation.len() > song.lyrics.len() {
            warn!(
                "Song '{}' has {} translation lines for {} lyric lines, ignoring the extra lines",
                song.id,
                song.translation.len(),
                song.lyrics.len()
            );
        }
    }
    Ok(())
}

fn phrases_for_song(song: &Song, scorer: &PhraseScorer, threshold: f64) -> Vec<ExtractedPhrase> {
    song.lines()
        .filter_map(|(line_index, line)| {
            let result = scorer.score(line, None);
            (result.score >= threshold).then(|| ExtractedPhrase {
                song_id: song.id.clone(),
                original_text: line.to_string(),
                translated_text: song.translation_at(line_index).map(str::to_string),
                line_index,
                score: result.score,
                category: result.category,
                word_count: line.split_whitespace().count(),
            })
        })
        .collect()
}

/// Score every lyric line and keep the ones at or above `threshold`, one rayon task per song.
pub fn extract_phrases(
    songs: &[Song],
    scorer: &PhraseScorer,
    threshold: f64,
) -> Result<PhraseExtraction, LetrasError> {
    validate_songs(songs)?;
    let start = Instant::now();

    let per_song: Vec<Vec<ExtractedPhrase>> =
        songs.par_iter().map(|song| phrases_for_song(song, scorer, threshold)).collect();

    for (song, phrases) in songs.iter().zip(&per_song) {
        debug!("Song '{}': {} useful phrases", song.id, phrases.len());
    }

    let phrases: Vec<ExtractedPhrase> = per_song.into_iter().flatten().collect();
    let category_counts = count_categories(&phrases);

    info!(
        "Extracted {} phrases from {} songs ({:.1}s)",
        phrases.len(),
        songs.len(),
        start.elapsed().as_secs_f32()
    );

    Ok(PhraseExtraction {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        threshold,
        songs_processed: songs.len(),
        phrases,
        category_counts,
    })
}

/// Counts per category in display order, zero counts included.
pub fn count_categories(phrases: &[ExtractedPhrase]) -> Vec<CategoryCount> {
    PHRASE_CATEGORIES
        .iter()
        .map(|info| CategoryCount {
            category: info.id,
            display_name: info.display_name.to_string(),
            count: phrases.iter().filter(|phrase| phrase.category == info.id).count(),
        })
        .collect()
}

#[derive(Default)]
struct WordOccurrences {
    count: usize,
    songs: HashSet<String>,
    example: Option<ExampleSentence>,
}

/// Rank the vocabulary of the whole song set and attach the first line each word appeared in.
pub fn extract_vocabulary(
    songs: &[Song],
    scorer: &VocabularyScorer,
    limit: usize,
) -> Result<VocabularyExtraction, LetrasError> {
    validate_songs(songs)?;
    let start = Instant::now();

    let mut candidates: Vec<&str> = Vec::new();
    let mut occurrences: HashMap<String, WordOccurrences> = HashMap::new();

    for song in songs {
        for (line_index, line) in song.lines() {
            for token in line.split_whitespace().map(strip_edge_punctuation) {
                if token.is_empty() {
                    continue;
                }
                candidates.push(token);

                let entry = occurrences.entry(normalize_word(token)).or_default();
                entry.count += 1;
                entry.songs.insert(song.id.clone());
                if entry.example.is_none() {
                    entry.example = Some(ExampleSentence {
                        song_id: song.id.clone(),
                        line_index,
                        original_text: line.to_string(),
                        translated_text: song.translation_at(line_index).map(str::to_string),
                    });
                }
            }
        }
    }

    debug!("{} candidate tokens, {} distinct words", candidates.len(), occurrences.len());

    let words: Vec<ExtractedVocabulary> = scorer
        .top_vocabulary(candidates, limit)
        .into_iter()
        .map(|ranked| {
            let stats = occurrences.remove(&ranked.word).unwrap_or_default();
            ExtractedVocabulary {
                word: ranked.word,
                score: ranked.score,
                frequency: ranked.frequency,
                part_of_speech: ranked.part_of_speech,
                occurrences: stats.count,
                song_count: stats.songs.len(),
                example: stats.example,
            }
        })
        .collect();

    info!(
        "Ranked {} vocabulary words from {} songs ({:.1}s)",
        words.len(),
        songs.len(),
        start.elapsed().as_secs_f32()
    );

    Ok(VocabularyExtraction {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        limit,
        songs_processed: songs.len(),
        words,
    })
}
