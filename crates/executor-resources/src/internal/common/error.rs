use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Executor resource not allowed: {0}")]
    InvalidResourceName(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<toml::de::Error> for ResourceError {
    fn from(error: toml::de::Error) -> Self {
        Self::DeserializationError(error.to_string())
    }
}
