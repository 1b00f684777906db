//! Error types for keyhelp.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyHelpError {
    #[error("Cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown output format: {0} (expected text, json or jsonl)")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeyHelpError>;
