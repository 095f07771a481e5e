use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage encoding error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Not found")]
    NotFound,

    #[error("Custom: {0}")]
    Custom(String),
}
