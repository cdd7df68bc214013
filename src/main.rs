use std::{
    path::PathBuf,
    process::ExitCode,
};

use clap::{
    Parser,
    Subcommand,
};
use letras::{
    core::pipeline::{
        extract_phrases,
        extract_vocabulary,
        load_songs,
    },
    is_useful_phrase,
    is_useful_vocabulary,
    persistence::{
        save_json,
        save_json_to,
        Settings,
    },
    LetrasError,
    PhraseScorer,
    VerbTense,
    VocabularyScorer,
    PHRASE_CATEGORIES,
};
use tracing::{
    error,
    info,
};

#[derive(Parser, Debug)]
#[command(name = "letras", version, about = "Score Spanish song lyrics for language learners")]
struct Cli {
    /// JSON word -> Zipf frequency table (defaults to the embedded table)
    #[arg(long, global = true, env = "LETRAS_FREQUENCIES")]
    frequencies: Option<PathBuf>,

    /// Skip reading and writing the binary frequency cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single lyric line
    ScorePhrase {
        text: String,
        /// Verb tense hint, may be repeated (e.g. present, preterite)
        #[arg(long = "tense")]
        tenses: Vec<String>,
    },
    /// Score a single word as vocabulary
    ScoreWord { word: String },
    /// Extract useful phrases from a songs JSON file
    ExtractPhrases {
        songs: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Rank vocabulary across a songs JSON file
    ExtractVocabulary {
        songs: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List phrase categories in display order
    Categories,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), LetrasError> {
    let mut settings = Settings::load();
    if let Some(path) = cli.frequencies {
        settings.frequency_table = Some(path);
    }
    if cli.no_cache {
        settings.use_cache = false;
    }

    match cli.command {
        Command::Categories => {
            for info in PHRASE_CATEGORIES {
                println!("{}. {} {} ({})", info.order, info.icon, info.display_name, info.id);
            }
        }
        Command::ScorePhrase { text, tenses } => {
            let scorer = PhraseScorer::new(settings.load_frequency_table()?);
            let tenses = VerbTense::parse_all(&tenses);
            let hints = (!tenses.is_empty()).then_some(tenses.as_slice());
            let result = scorer.score(&text, hints);
            println!("{}", serde_json::to_string_pretty(&result)?);
            println!("useful: {}", is_useful_phrase(result.score));
        }
        Command::ScoreWord { word } => {
            let scorer = VocabularyScorer::new(settings.load_frequency_table()?);
            match scorer.score_word(&word) {
                Some(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                    println!("useful: {}", is_useful_vocabulary(result.score));
                }
                None => println!("'{}' is not eligible as vocabulary", word.trim()),
            }
        }
        Command::ExtractPhrases { songs, output, threshold } => {
            let threshold = threshold.unwrap_or(settings.phrase_threshold);
            let scorer = PhraseScorer::new(settings.load_frequency_table()?);
            let songs = load_songs(&songs)?;
            let extraction = extract_phrases(&songs, &scorer, threshold)?;

            for count in &extraction.category_counts {
                info!("{:<22} {}", count.display_name, count.count);
            }
            match output {
                Some(path) => save_json_to(&extraction, &path)?,
                None => {
                    save_json(&extraction, "phrases.json")?;
                }
            }
        }
        Command::ExtractVocabulary { songs, output, limit } => {
            let limit = limit.unwrap_or(settings.vocabulary_limit);
            let scorer = VocabularyScorer::new(settings.load_frequency_table()?);
            let songs = load_songs(&songs)?;
            let extraction = extract_vocabulary(&songs, &scorer, limit)?;

            match output {
                Some(path) => save_json_to(&extraction, &path)?,
                None => {
                    save_json(&extraction, "vocabulary.json")?;
                }
            }
        }
    }

    Ok(())
}
