// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollwatchError {
    /// A watch or ignore pattern did not parse as a glob. Raised during
    /// watcher construction; no watcher is produced.
    #[error("couldn't resolve glob pattern {pattern:?}: {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// I/O failure while walking a watch root. Delivered once over the
    /// error stream; the watch loop stops permanently afterwards.
    #[error("walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PollwatchError>;
