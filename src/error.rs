use std::path::PathBuf;
use thiserror::Error;

/// Fatal error raised by the maintenance commands.
///
/// Every variant keeps the underlying cause so callers and tests can inspect
/// what actually failed; `main` maps any of them to exit code 1. Nothing is
/// retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("wrong date format: {0:?} (expected YYYY-MM)")]
    DateFormat(String),

    #[error("config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
