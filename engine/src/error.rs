//! Error types for the generator
//!
//! Seeding from a plain `u64` and drawing values are infallible. Only the
//! operations that accept external input (key arrays, snapshots, config)
//! can fail, and they never leave an engine half-modified.

use thiserror::Error;

/// Errors returned by fallible generator operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("Seed key must contain at least one word")]
    EmptyKey,

    #[error("Invalid state length: expected {expected} words, got {actual}")]
    InvalidStateLength { expected: usize, actual: usize },

    #[error("Invalid cursor: {index} exceeds state size {max}")]
    InvalidIndex { index: usize, max: usize },

    #[error("Snapshot checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for RngError {
    fn from(err: serde_json::Error) -> Self {
        RngError::Serialization(err.to_string())
    }
}
