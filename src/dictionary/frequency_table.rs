use std::{
    collections::HashMap,
    fs::{
        self,
        File,
    },
    io::{
        BufReader,
        Read,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
    time::{
        Instant,
        UNIX_EPOCH,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    info,
    warn,
};

use crate::core::{
    utils::normalize_word,
    LetrasError,
};

const EMBEDDED_FREQUENCIES: &str = include_str!("../../data/es_frequencies.json");
const EMBEDDED_TITLE: &str = "embedded-es";

/// Read-only word -> Zipf frequency lookup. Built once, shared behind an `Arc`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FrequencyTable {
    pub title: String,
    pub revision: String,
    terms: HashMap<String, f64>,
}

impl FrequencyTable {
    pub fn from_entries<I, S>(title: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut terms = HashMap::new();
        for (word, zipf) in entries {
            let key = normalize_word(word.as_ref());
            if key.is_empty() {
                continue;
            }
            if !zipf.is_finite() {
                warn!("Skipping non-finite frequency for '{}' in '{}'", key, title);
                continue;
            }
            terms.insert(key, zipf);
        }

        FrequencyTable { title: title.to_string(), revision: String::new(), terms }
    }

    pub fn from_json_str(title: &str, json: &str) -> Result<Self, LetrasError> {
        let raw: HashMap<String, f64> = serde_json::from_str(json)?;
        Ok(Self::from_entries(title, raw))
    }

    /// The table compiled into the binary.
    pub fn embedded() -> Result<Self, LetrasError> {
        let mut table = Self::from_json_str(EMBEDDED_TITLE, EMBEDDED_FREQUENCIES)?;
        table.revision = env!("CARGO_PKG_VERSION").to_string();
        Ok(table)
    }

    /// Load a JSON `{ word: zipf }` table, going through the binary cache when `use_cache` is set.
    pub fn load(path: &Path, use_cache: bool) -> Result<Self, LetrasError> {
        if !path.is_file() {
            return Err(LetrasError::FrequencyTableNotFound(path.display().to_string()));
        }

        let title = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("frequencies")
            .to_string();
        let revision = source_revision(path)?;
        let cache_path = cache_path_for(path);

        if use_cache {
            let load_start = Instant::now();
            match load_cached_table(&cache_path) {
                Ok(cached) if cached.revision == revision => {
                    info!(
                        "Loaded '{}' from cache in {:?}: {} entries",
                        title,
                        load_start.elapsed(),
                        cached.len()
                    );
                    return Ok(cached);
                }
                Ok(cached) => {
                    debug!(
                        "Revision mismatch for '{}': cache={}, source={}",
                        title, cached.revision, revision
                    );
                }
                Err(e) => {
                    debug!("No usable cache for '{}': {}, rebuilding from JSON", title, e);
                }
            }
        }

        let build_start = Instant::now();
        let json = fs::read_to_string(path)?;
        let mut table = Self::from_json_str(&title, &json)?;
        table.revision = revision;
        info!("Built '{}' from JSON in {:?}: {} entries", title, build_start.elapsed(), table.len());

        if use_cache {
            if let Err(e) = save_cached_table(&table, &cache_path) {
                warn!("Failed to save cache for '{}': {}", title, e);
            }
        }

        Ok(table)
    }

    /// Zipf frequency for `word`, normalized the same way the keys were.
    pub fn zipf(&self, word: &str) -> Option<f64> {
        if let Some(&zipf) = self.terms.get(word) {
            return Some(zipf);
        }
        self.terms.get(&normalize_word(word)).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.zipf(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

pub fn cache_path_for(source: &Path) -> PathBuf {
    source.with_extension("cache.bin")
}

// Size plus mtime is enough to notice an edited asset.
fn source_revision(path: &Path) -> Result<String, LetrasError> {
    let metadata = fs::metadata(path)?;
    let modified = metadata
        .modified()
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|duration| duration.as_nanos())
        .unwrap_or_default();
    Ok(format!("{}-{}", metadata.len(), modified))
}

fn load_cached_table(cache_path: &Path) -> Result<FrequencyTable, LetrasError> {
    let file = File::open(cache_path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    let (table, _): (FrequencyTable, usize) =
        bincode::serde::decode_from_slice(&buffer, bincode::config::standard())?;
    Ok(table)
}

fn save_cached_table(table: &FrequencyTable, cache_path: &Path) -> Result<(), LetrasError> {
    let encoded = bincode::serde::encode_to_vec(table, bincode::config::standard())?;
    let mut file = File::create(cache_path)?;
    file.write_all(&encoded)?;
    Ok(())
}
