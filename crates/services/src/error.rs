//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::catalog::CatalogError;
use quiz_core::model::SettingsError;

/// Errors emitted while loading settings or a food table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("food table is empty")]
    EmptyCatalog,
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
