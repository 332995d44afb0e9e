//! Error types for eduframe.

use crate::completion::CompletionError;
use std::io;
use thiserror::Error;

/// Result type alias for eduframe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in eduframe operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Stored snapshot parsed but has the wrong shape.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// User input rejected before any request was issued.
    #[error("{0}")]
    Validation(String),

    /// The completion collaborator failed. Displays only the generic
    /// message; the detail stays in the source.
    #[error("{}", crate::analysis::COMPLETION_FAILED_MESSAGE)]
    Completion(#[from] CompletionError),

    /// An analysis request is already outstanding.
    #[error("An analysis is already in progress")]
    Busy,

    /// History entry not found.
    #[error("History entry not found: {0}")]
    EntryNotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
