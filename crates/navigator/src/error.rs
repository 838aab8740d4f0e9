#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate registry path: {0}")]
    DuplicatePath(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type NavigatorResult<T> = std::result::Result<T, NavigatorError>;

impl From<serde_json::Error> for NavigatorError {
    fn from(error: serde_json::Error) -> Self {
        NavigatorError::Serialization(error.to_string())
    }
}
