use thiserror::Error;

/// Top-level error type for Hogwords.
#[derive(Debug, Error)]
pub enum HogwordsError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Persisted session store error.
    #[error("session store error: {0}")]
    Store(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
