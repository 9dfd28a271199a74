use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;
use crate::username::Username;

/// Terminal outcomes of a persona run other than success.
#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("invalid profile URL: '{0}'")]
    InvalidUrl(String),

    #[error("no posts or comments found for user '{0}'")]
    NoContent(Username),

    #[error("persona generation failed: {0}")]
    GenerationFailed(#[from] LlmError),

    #[error("failed to write persona to '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from a remote record source.
///
/// The record fetcher swallows these after logging; they never abort a run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Suspended or private account.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limited by the remote service")]
    RateLimited,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
