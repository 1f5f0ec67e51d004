use async_trait::async_trait;

use vidlearn_core::model::{Question, VideoId};

use super::source::QuestionSource;
use crate::error::QuestionSourceError;

/// Question source backed by fixed in-memory content, for tests and for
/// hosts that materialize questions themselves.
#[derive(Clone, Default)]
pub struct InMemoryQuestionSource {
    questions: Vec<Question>,
    summary: Option<String>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            summary: None,
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn fetch_questions(
        &self,
        _video: &VideoId,
        count: u32,
    ) -> Result<Vec<Question>, QuestionSourceError> {
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        Ok(self.questions.iter().take(count).cloned().collect())
    }

    async fn fetch_summary(&self, _video: &VideoId) -> Result<String, QuestionSourceError> {
        self.summary
            .clone()
            .ok_or(QuestionSourceError::EmptyResponse)
    }
}
