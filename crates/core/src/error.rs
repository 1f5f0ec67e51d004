use thiserror::Error;

use crate::model::{QuestionValidationError, QuizSettingsError, QuizSummaryError, VideoUrlError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionValidationError),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
    #[error(transparent)]
    VideoUrl(#[from] VideoUrlError),
}
