//! Completion collaborator: topic in, analysis text out.

pub mod gemini;
pub mod prompt;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub use gemini::GeminiClient;
pub use prompt::SYSTEM_INSTRUCTION;

/// Failure of a completion request. Every variant is treated the same by
/// the orchestrator; the detail is only logged.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,

        /// Response body, if any.
        message: String,
    },

    /// The API answered but produced no text.
    #[error("model returned no text")]
    EmptyResponse,

    /// No API key configured.
    #[error("no API key configured (set API_KEY or [model] api_key)")]
    MissingApiKey,

    /// Any other failure, e.g. from a test double.
    #[error("{0}")]
    Other(String),
}

/// Produces an analysis for a topic.
///
/// Implementations enforce their own timeouts; callers never retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request an analysis of `topic`.
    async fn complete(&self, topic: &str) -> Result<String, CompletionError>;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for Arc<T> {
    async fn complete(&self, topic: &str) -> Result<String, CompletionError> {
        (**self).complete(topic).await
    }
}
