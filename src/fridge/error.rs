use thiserror::Error;

#[derive(Error, Debug)]
pub enum FridgeError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl FridgeError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        FridgeError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        FridgeError::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FridgeError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FridgeError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, FridgeError>;
