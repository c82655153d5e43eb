use crate::error::{Error, Result};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::error;

/// Top-level configuration, one `database` section.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Connection credentials for the logger database.
///
/// `host`, `user` and `database` are mandatory; deserialization fails when any
/// of them is missing, so a loaded config is always complete. `password` and
/// `port` are passed to the driver when present, unknown keys are tolerated.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub database: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl Config {
    /// Read and validate the JSON configuration file.
    ///
    /// Validation happens here, exactly once; callers can rely on every
    /// mandatory field being present afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] when the file is missing or unreadable
    /// and [`Error::ConfigParse`] for malformed JSON or missing mandatory
    /// keys, each wrapping the underlying cause.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| {
            error!("cannot read config file {}: {source}", path.display());
            Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        })?;

        serde_json::from_str(&raw).map_err(|source| {
            error!("incorrect config file {}: {source}", path.display());
            Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}
