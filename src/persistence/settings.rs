use std::{
    path::PathBuf,
    sync::Arc,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::info;

use super::{
    load_json_or_default,
    save_json,
};
use crate::{
    core::LetrasError,
    dictionary::FrequencyTable,
    scoring::{
        DEFAULT_VOCABULARY_LIMIT,
        USEFULNESS_THRESHOLD,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// JSON Zipf table to use instead of the embedded one.
    pub frequency_table: Option<PathBuf>,
    pub vocabulary_limit: usize,
    pub phrase_threshold: f64,
    pub use_cache: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frequency_table: None,
            vocabulary_limit: DEFAULT_VOCABULARY_LIMIT,
            phrase_threshold: USEFULNESS_THRESHOLD,
            use_cache: true,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) -> Result<PathBuf, LetrasError> {
        save_json(self, SETTINGS_FILE)
    }

    /// Load the configured frequency table, or the embedded one when none is set.
    pub fn load_frequency_table(&self) -> Result<Arc<FrequencyTable>, LetrasError> {
        let table = match &self.frequency_table {
            Some(path) => FrequencyTable::load(path, self.use_cache)?,
            None => FrequencyTable::embedded()?,
        };
        info!("Using frequency table '{}' ({} entries)", table.title, table.len());
        Ok(Arc::new(table))
    }
}
