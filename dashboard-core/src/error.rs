use thiserror::Error;

/// Failures of the key/value store backing user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read preference '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write preference '{key}': {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised theme '{0}'")]
pub struct ParseThemeError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("host config rejected: {0}")]
    Host(String),
    #[error("theme storage key must not be empty")]
    EmptyStorageKey,
    #[error("invalid log level '{0}'")]
    LogLevel(String),
}
