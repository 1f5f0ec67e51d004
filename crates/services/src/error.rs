//! Shared error types for the services crate.

use thiserror::Error;

use vidlearn_core::model::{QuestionValidationError, QuizSummaryError};

/// Errors emitted by the quiz progression engine.
///
/// These mark invalid usage from the hosting view, never an internal fault:
/// the session state is left untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("quiz is already completed")]
    Completed,

    #[error("quiz is not completed yet")]
    NotCompleted,

    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}

/// Errors emitted by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question source is not configured")]
    Disabled,

    #[error("question source returned no content")]
    EmptyResponse,

    #[error("question source request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    InvalidQuestion(#[from] QuestionValidationError),
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Session(#[from] QuizSessionError),

    #[error(transparent)]
    Source(#[from] QuestionSourceError),
}
