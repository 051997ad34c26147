use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Share error: {0}")]
    Share(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for BrainError {
    fn from(err: toml::de::Error) -> Self {
        BrainError::Config(err.to_string())
    }
}
