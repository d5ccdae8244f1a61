// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! The runner itself only ever produces [`CmdstreamError::InvalidSpec`] or
//! [`CmdstreamError::Runtime`]; the remaining variants belong to config
//! loading and the CLI layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmdstreamError {
    /// The command specification is neither a shell string nor a non-empty
    /// token sequence. Raised before anything is spawned.
    #[error("Invalid command specification: {0}")]
    InvalidSpec(String),

    /// Spawn, pipe I/O or wait failure while running a command.
    #[error("An error occurred: {context}: {source}")]
    Runtime {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CmdstreamError {
    /// Wrap an I/O failure from the run loop.
    pub fn runtime(context: impl Into<String>, source: std::io::Error) -> Self {
        CmdstreamError::Runtime {
            context: context.into(),
            source,
        }
    }

    pub fn is_invalid_spec(&self) -> bool {
        matches!(self, CmdstreamError::InvalidSpec(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, CmdstreamError::Runtime { .. })
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CmdstreamError>;
