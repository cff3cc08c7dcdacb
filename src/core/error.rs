use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Image encoding error: {0}")]
    ImageError(String),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
