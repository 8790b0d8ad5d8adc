use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Record store error: {0}")]
    Store(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown continent: {0}")]
    UnknownContinent(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
