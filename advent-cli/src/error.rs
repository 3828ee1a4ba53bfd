//! Error types for the CLI

use advent_core::{RegistrationError, SolverError};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Folder hashing error
    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    /// Puzzle error
    #[error("Puzzle error: {0}")]
    Solver(#[from] SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),
}

/// Cache-specific errors
#[derive(Debug, Error)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but cannot be deserialized. Fatal at startup;
    /// the operator deletes the file to recover, every entry is recomputable.
    #[error("Corrupt cache file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory mapping could not be serialized
    #[error("Cache serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Content hashing errors
#[derive(Debug, Error)]
pub enum HashError {
    /// The puzzle folder does not exist
    #[error("Folder not found! ({0})")]
    NotFound(PathBuf),

    /// IO error while reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
