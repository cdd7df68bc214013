#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        dictionary::FrequencyTable,
        scoring::{
            is_useful_phrase,
            is_useful_vocabulary,
            phrase::{
                phrase_length_score,
                repetitiveness_score,
                verb_complexity_score,
            },
            vocabulary::{
                frequency_optimality,
                length_bonus,
            },
            PartOfSpeech,
            PhraseCategory,
            PhraseScorer,
            VerbTense,
            VocabularyScorer,
        },
    };

    const AWKWARD_INPUTS: &[&str] = &[
        "",
        "   ",
        "\t\n",
        "???",
        "¿¡!?",
        "...",
        "a",
        "🎶🎶🎶",
        "x y z",
        "ЛЮБОВЬ моя",
        "こんにちは",
        "la la la la la la la la",
        "Hola, ¿cómo estás?",
        "Te quiero, te quiero, te quiero",
        "supercalifragilisticoespialidoso",
        "123 456",
        "don't stop me now",
        "el el el el",
    ];

    fn table() -> Arc<FrequencyTable> {
        Arc::new(FrequencyTable::embedded().expect("embedded table"))
    }

    fn phrase_scorer() -> PhraseScorer {
        PhraseScorer::new(table())
    }

    fn vocabulary_scorer() -> VocabularyScorer {
        VocabularyScorer::new(table())
    }

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_phrase_scores_stay_in_range() {
        let scorer = phrase_scorer();
        for input in AWKWARD_INPUTS {
            let result = scorer.score(input, None);
            assert!((0.0..=1.0).contains(&result.score), "score out of range for {:?}", input);
            let f = result.factors;
            for factor in [
                f.word_frequency,
                f.phrase_length,
                f.verb_complexity,
                f.question_pattern,
                f.greeting_pattern,
                f.common_expression,
                f.repetitiveness,
            ] {
                assert!((0.0..=1.0).contains(&factor), "factor out of range for {:?}", input);
            }
            assert!(PhraseCategory::ALL.contains(&result.category));
        }
    }

    #[test]
    fn test_vocabulary_scores_stay_in_range() {
        let scorer = vocabulary_scorer();
        let words = AWKWARD_INPUTS
            .iter()
            .flat_map(|input| input.split_whitespace())
            .chain(["realmente", "corazón", "bailar", "peligroso", "CANCIÓN", "pingüino"]);

        for word in words {
            if let Some(result) = scorer.score_word(word) {
                assert!((0.0..=1.0).contains(&result.score));
                // Only these four are ever produced by the suffix classifier.
                assert!(matches!(
                    result.part_of_speech,
                    PartOfSpeech::Noun
                        | PartOfSpeech::Verb
                        | PartOfSpeech::Adjective
                        | PartOfSpeech::Adverb
                ));
            }
        }
    }

    #[test]
    fn test_scorers_are_idempotent() {
        let phrases = phrase_scorer();
        let words = vocabulary_scorer();
        for input in AWKWARD_INPUTS {
            assert_eq!(phrases.score(input, None), phrases.score(input, None));
            assert_eq!(words.score_word(input), words.score_word(input));
        }
    }

    #[test]
    fn test_empty_phrase_defaults() {
        let result = phrase_scorer().score("   ", None);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.category, PhraseCategory::Vocabulary);
        assert_eq!(result.factors.word_frequency, 0.0);
        assert_eq!(result.factors.repetitiveness, 0.0);
    }

    #[test]
    fn test_rejections() {
        let scorer = vocabulary_scorer();
        for stopword in ["el", "de", "que", "Nosotros"] {
            assert!(scorer.score_word(stopword).is_none(), "{} should be rejected", stopword);
        }
        for verb in ["ser", "tener", "ESTAR"] {
            assert!(scorer.score_word(verb).is_none(), "{} should be rejected", verb);
        }
        assert!(scorer.score_word("yo").is_none());
        assert!(scorer.score_word("mi").is_none());
        assert!(scorer.score_word("don't").is_none());
        assert!(scorer.score_word("naïve").is_none());
        assert!(scorer.score_word("amor2").is_none());
        assert!(scorer.score_word("").is_none());
    }

    #[test]
    fn test_corazon() {
        let result = vocabulary_scorer().score_word("  Corazón ").expect("corazón is eligible");
        assert_eq!(result.word, "corazón");
        assert_eq!(result.part_of_speech, PartOfSpeech::Noun);
        assert_eq!(result.frequency, 5.0);
        // optimality 0.0 at Zipf 5.0, noun weight, four extra letters
        assert!(approx(result.score, 0.3 + 0.08));
        assert!(!is_useful_vocabulary(result.score));
    }

    #[test]
    fn test_unknown_word_uses_default_frequency() {
        let result = vocabulary_scorer().score_word("guitarrista").unwrap();
        assert_eq!(result.frequency, 1.0);
        assert_eq!(result.part_of_speech, PartOfSpeech::Noun);
        assert!(approx(result.score, 0.6 * 0.2 + 0.3 + 0.16));
        assert!(is_useful_vocabulary(result.score));
    }

    #[test]
    fn test_verb_scoring() {
        let result = vocabulary_scorer().score_word("bailar").unwrap();
        assert_eq!(result.part_of_speech, PartOfSpeech::Verb);
        let expected = 0.6 * (1.0 - 0.7 / 1.5) + 0.3 * 0.9 + 0.06;
        assert!(approx(result.score, expected));
    }

    #[test]
    fn test_frequency_optimality_curve() {
        assert!(approx(frequency_optimality(3.5), 1.0));
        assert!(approx(frequency_optimality(2.0), 0.0));
        assert!(approx(frequency_optimality(5.0), 0.0));
        assert!(approx(frequency_optimality(4.25), 0.5));
        assert!(approx(frequency_optimality(6.0), 0.2));
        assert!(approx(frequency_optimality(9.0), 0.0));
        assert!(approx(frequency_optimality(1.0), 0.2));
        assert!(approx(frequency_optimality(0.0), 0.0));
    }

    #[test]
    fn test_length_bonus_caps() {
        assert!(approx(length_bonus("sol"), 0.0));
        assert!(approx(length_bonus("canción"), 0.08));
        assert!(approx(length_bonus("supercalifragilistico"), 0.2));
    }

    #[test]
    fn test_top_vocabulary() {
        let words =
            ["corazón", "Corazón", "bailar", "el", "ser", "yo", "guitarrista", "CORAZÓN"];
        let top = vocabulary_scorer().top_vocabulary(words, 10);

        let found: Vec<&str> = top.iter().map(|entry| entry.word.as_str()).collect();
        assert_eq!(found, vec!["bailar", "guitarrista", "corazón"]);
        assert!(top.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert!(top.iter().all(|entry| entry.score > 0.3));
    }

    #[test]
    fn test_top_vocabulary_limit_and_uniqueness() {
        let text = "Mi corazón late por ti, bailar contigo es mi destino, \
                    canción de amor, guitarra y pasión en la ciudad, \
                    la felicidad de mi familia, realmente maravilloso";
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .collect();
        let top = vocabulary_scorer().top_vocabulary(&words, 5);

        assert!(top.len() <= 5);
        let mut unique: Vec<&str> = top.iter().map(|entry| entry.word.as_str()).collect();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), top.len());
        assert!(top.iter().all(|entry| entry.score > 0.3));
        assert!(vocabulary_scorer().top_vocabulary(&words, 0).is_empty());
    }

    #[test]
    fn test_ranking_floor_is_exclusive() {
        let table = FrequencyTable::from_entries("floor", [("sol", 5.0), ("luz", 4.9)]);
        let scorer = VocabularyScorer::new(Arc::new(table));

        let sol = scorer.score_word("sol").unwrap();
        assert!(approx(sol.score, 0.3));

        let top = scorer.top_vocabulary(["sol", "luz"], 10);
        let words: Vec<&str> = top.iter().map(|entry| entry.word.as_str()).collect();
        assert_eq!(words, vec!["luz"]);
    }

    #[test]
    fn test_thresholds() {
        assert!(is_useful_phrase(0.4));
        assert!(!is_useful_phrase(0.39999));
        assert!(is_useful_vocabulary(0.4));
        assert!(!is_useful_vocabulary(0.39));
    }

    #[test]
    fn test_greeting_beats_question() {
        let result = phrase_scorer().score("Hola, ¿cómo estás?", None);
        assert_eq!(result.category, PhraseCategory::Greetings);
    }

    #[test]
    fn test_question_example() {
        let result = phrase_scorer().score("¿Cómo estás?", None);
        assert_eq!(result.category, PhraseCategory::Questions);
        assert!(result.score > 0.0);
        assert_eq!(result.factors.common_expression, 1.0);
    }

    #[test]
    fn test_category_priority_chain() {
        let scorer = phrase_scorer();
        let cases = [
            ("Hasta mañana", PhraseCategory::Greetings),
            ("Mañana te veo", PhraseCategory::Time),
            ("Mi corazón está triste", PhraseCategory::Emotions),
            ("Pero no me olvides", PhraseCategory::Connectors),
            ("Baila conmigo", PhraseCategory::Actions),
            ("Por favor quédate", PhraseCategory::Expressions),
            ("La luna brilla sobre el mar", PhraseCategory::Vocabulary),
        ];
        for (phrase, expected) in cases {
            assert_eq!(scorer.score(phrase, None).category, expected, "for {:?}", phrase);
        }
    }

    #[test]
    fn test_exclusion_zeroes_repetitiveness() {
        let scorer = phrase_scorer();
        let chant = scorer.score("la la la la", None);
        assert_eq!(chant.factors.repetitiveness, 0.0);
        assert_eq!(chant.factors.common_expression, 0.0);
        assert!(chant.score <= 0.5);

        let pet_name = scorer.score("Baby, te quiero", None);
        assert_eq!(pet_name.factors.repetitiveness, 0.0);
    }

    #[test]
    fn test_repetitiveness_rewards_variety() {
        assert_eq!(repetitiveness_score("amor amor amor amor"), 0.25);
        assert_eq!(repetitiveness_score("Amor AMOR"), 0.5);
        assert_eq!(repetitiveness_score("el sol brilla hoy"), 1.0);
    }

    #[test]
    fn test_word_frequency_factor() {
        let scorer = phrase_scorer();
        // "mirada" sits at Zipf 4.0 in the embedded table
        assert!(approx(scorer.word_frequency_score("mirada"), 0.75));
        // single characters are not words
        assert!(approx(scorer.word_frequency_score("mirada y"), 0.75));
        // tokens opening with punctuation are skipped
        assert_eq!(scorer.word_frequency_score("(mirada)"), 0.0);
        // unknown long word falls back to the 0.5 estimate, below the floor
        assert_eq!(scorer.word_frequency_score("guitarrista"), 0.0);
    }

    #[test]
    fn test_final_score_weights() {
        let result = phrase_scorer().score("Me gusta la playa", None);
        let f = result.factors;
        let expected = 0.5 * f.word_frequency + 0.3 * f.common_expression + 0.2 * f.repetitiveness;
        assert!(approx(result.score, expected.min(1.0)));
        assert_eq!(f.common_expression, 1.0);
    }

    #[test]
    fn test_unweighted_factors_are_zeroed() {
        let tenses = [VerbTense::Present];
        let result = phrase_scorer().score("¿Qué tal, amigo?", Some(&tenses[..]));
        assert_eq!(result.category, PhraseCategory::Greetings);
        assert_eq!(result.factors.phrase_length, 0.0);
        assert_eq!(result.factors.verb_complexity, 0.0);
        assert_eq!(result.factors.question_pattern, 0.0);
        assert_eq!(result.factors.greeting_pattern, 0.0);
    }

    #[test]
    fn test_tense_hints_do_not_change_score() {
        let scorer = phrase_scorer();
        let plain = scorer.score("Si tuviera tu amor", None);
        let hinted = scorer.score("Si tuviera tu amor", Some(&[VerbTense::ImperfectSubjunctive][..]));
        assert_eq!(plain, hinted);
    }

    #[test]
    fn test_helper_factors() {
        assert_eq!(phrase_length_score(""), 0.0);
        assert_eq!(phrase_length_score("hola"), 0.2);
        assert_eq!(phrase_length_score("hola amigo"), 0.6);
        assert_eq!(phrase_length_score("te quiero mucho"), 1.0);
        assert_eq!(verb_complexity_score(None), 0.5);
        assert_eq!(verb_complexity_score(Some(&[] as &[VerbTense])), 0.5);
        assert!(approx(
            verb_complexity_score(Some(&[VerbTense::Present, VerbTense::Conditional][..])),
            0.75
        ));
    }

    #[test]
    fn test_phrase_score_serializes_camel_case() {
        let result = phrase_scorer().score("¿Cómo estás?", None);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["category"], "questions");
        assert!(json["factors"].get("wordFrequency").is_some());
        assert!(json["factors"].get("commonExpression").is_some());
    }
}
