use thiserror::Error;

/// Errors loading extra translation entries.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse translations: {0}")]
    Parse(#[from] toml::de::Error),
}
