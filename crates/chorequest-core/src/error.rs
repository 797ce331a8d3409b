//! Core error types for chorequest-core.
//!
//! Guarded conditions that the spec treats as silent no-ops (blank chore
//! names, removing an unknown id) are not errors; they are handled by the
//! store returning `None`. Everything that touches the filesystem or a
//! caller-supplied identifier reports through these types.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for chorequest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State-file errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// State-file errors.
///
/// Loading never produces an error: absent or corrupt state falls back to
/// defaults. Only saving can fail.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to serialize or write the state file
    #[error("Failed to save state to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Could not resolve the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not resolve the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// No chore with the given id
    #[error("Unknown chore id: {0}")]
    UnknownChore(String),

    /// Difficulty string is not one of easy/medium/hard
    #[error("Invalid difficulty '{0}' (expected easy, medium, or hard)")]
    InvalidDifficulty(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
