pub mod settings;

use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::core::LetrasError;

pub use settings::Settings;

const APP_NAME: &str = "letras";
const DATA_DIR_ENV: &str = "LETRAS_DATA_DIR";

pub fn get_app_data_dir() -> PathBuf {
    let app_dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join(APP_NAME),
            None => PathBuf::from("."),
        },
    };
    let _ = fs::create_dir_all(&app_dir);
    app_dir
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json_to<T: Serialize>(data: &T, path: &Path) -> Result<(), LetrasError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    info!("Data saved to: {}", path.display());
    Ok(())
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<PathBuf, LetrasError> {
    let file_path = get_data_file_path(filename);
    save_json_to(data, &file_path)?;
    Ok(file_path)
}

pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, LetrasError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    info!("Data loaded from: {}", path.display());
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json_from::<T>(&get_data_file_path(filename)) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
