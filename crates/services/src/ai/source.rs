use async_trait::async_trait;

use vidlearn_core::model::{Question, VideoId};

use crate::error::QuestionSourceError;

/// Boundary to the external AI/content service.
///
/// Implementations only transport and validate material that was already
/// generated elsewhere; nothing in this crate produces summary or question
/// content itself.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch up to `count` generated questions for the video.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the source is unconfigured,
    /// unreachable, or delivers malformed questions.
    async fn fetch_questions(
        &self,
        video: &VideoId,
        count: u32,
    ) -> Result<Vec<Question>, QuestionSourceError>;

    /// Fetch the generated summary text for the video.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the source is unconfigured,
    /// unreachable, or delivers an empty summary.
    async fn fetch_summary(&self, video: &VideoId) -> Result<String, QuestionSourceError>;
}
