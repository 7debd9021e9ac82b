use thiserror::Error;

/// Failures talking to the browser's key-value storage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("local storage is disabled or blocked")]
    Unavailable,
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("rule {index} has no keywords")]
    EmptyRule { index: usize },
}
