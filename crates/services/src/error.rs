//! Shared error types for the services crate.

use thiserror::Error;

use saboteur_core::model::ScoreError;

/// Errors emitted by `NarrativeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NarrativeError {
    #[error("narrative generation is not configured")]
    Disabled,
    #[error("narrative generation returned an empty response")]
    EmptyResponse,
    #[error("narrative request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by assessment sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Completed,
    #[error(transparent)]
    Score(#[from] ScoreError),
}
