//! Error type shared by the scanner, batch driver and renderers.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("failed to compile declaration pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid version: {0:?} (expected MAJOR[.MINOR])")]
    InvalidVersion(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
