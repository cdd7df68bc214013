use thiserror::Error;

#[derive(Error, Debug)]
pub enum LetrasError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cache encode error: {0}")]
    CacheEncode(Box<bincode::error::EncodeError>),

    #[error("Cache decode error: {0}")]
    CacheDecode(Box<bincode::error::DecodeError>),

    #[error("Frequency table not found: {0}")]
    FrequencyTableNotFound(String),

    #[error("Invalid song: {0}")]
    InvalidSong(String),

    #[error("LetrasError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for LetrasError {
    fn from(error: std::io::Error) -> Self {
        LetrasError::Io(Box::new(error))
    }
}

impl From<bincode::error::EncodeError> for LetrasError {
    fn from(error: bincode::error::EncodeError) -> Self {
        LetrasError::CacheEncode(Box::new(error))
    }
}

impl From<bincode::error::DecodeError> for LetrasError {
    fn from(error: bincode::error::DecodeError) -> Self {
        LetrasError::CacheDecode(Box::new(error))
    }
}
