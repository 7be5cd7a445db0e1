use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::services::media_file_service::DEFAULT_BULK_DELETE_CONCURRENCY;

/// Which path scheme is active. Read-only after initialization and shared by
/// all callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathSchemeKind {
    /// Identifier-based scheme; the default for new installations.
    Unique,
    /// Numbered-folder scheme, for systems upgraded from historical data.
    Legacy,
}

impl FromStr for PathSchemeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unique" => Ok(PathSchemeKind::Unique),
            "legacy" => Ok(PathSchemeKind::Legacy),
            other => Err(ConfigError::InvalidScheme(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_root: PathBuf,
    pub path_scheme: PathSchemeKind,
    pub bulk_delete_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let storage_root = env::var("MEDIA_STORAGE_ROOT")
            .unwrap_or_else(|_| "./media".to_string())
            .into();

        let path_scheme = env::var("MEDIA_PATH_SCHEME")
            .unwrap_or_else(|_| "unique".to_string())
            .parse()?;

        let bulk_delete_concurrency = env::var("MEDIA_BULK_DELETE_CONCURRENCY")
            .unwrap_or_else(|_| DEFAULT_BULK_DELETE_CONCURRENCY.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidConcurrency)?;

        if bulk_delete_concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }

        Ok(Config {
            storage_root,
            path_scheme,
            bulk_delete_concurrency,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown media path scheme: {0}")]
    InvalidScheme(String),

    #[error("Bulk delete concurrency must be a positive integer")]
    InvalidConcurrency,
}
