use std::sync::Arc;
use std::time::Duration;

use log::debug;

use vidlearn_core::Clock;
use vidlearn_core::model::{QuizSettings, VideoId};

use super::service::{AdvanceToken, QuizSession};
use crate::ai::QuestionSource;
use crate::error::QuizError;

/// Result of answering a single question in a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub is_correct: bool,
    pub is_complete: bool,
    pub advance: Option<AdvanceToken>,
}

/// Orchestrates quiz start, answering, and the timed auto-advance.
///
/// The session itself stays owned by the hosting view; every operation
/// borrows it for the duration of the call. The only time-deferred action
/// in the system is [`QuizLoopService::auto_advance`].
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    settings: QuizSettings,
    source: Arc<dyn QuestionSource>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            clock,
            settings: QuizSettings::default(),
            source,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Fetch the generated questions for a video and start a session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the source cannot supply questions.
    pub async fn start_quiz(&self, video: &VideoId) -> Result<QuizSession, QuizError> {
        let questions = self
            .source
            .fetch_questions(video, self.settings.question_count())
            .await?;
        debug!("starting quiz for {video}: {} questions", questions.len());
        Ok(QuizSession::new(questions, self.clock.now()))
    }

    /// Fetch the generated summary text for a video.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the source cannot supply a summary.
    pub async fn fetch_summary(&self, video: &VideoId) -> Result<String, QuizError> {
        Ok(self.source.fetch_summary(video).await?)
    }

    /// Evaluate a selection for the session's current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when the quiz is already completed.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        option: &str,
    ) -> Result<QuizAnswerResult, QuizError> {
        let feedback = session.select_option(option, self.clock.now())?;
        if feedback.advance.is_some() {
            debug!(
                "correct answer on question {}, advance armed",
                session.current_index()
            );
        }
        Ok(QuizAnswerResult {
            is_correct: feedback.is_correct,
            is_complete: session.is_complete(),
            advance: feedback.advance,
        })
    }

    /// Wait out the configured delay, then apply the armed advance.
    ///
    /// Returns `false` when the token went stale in the meantime — after a
    /// restart, a re-selection, or an advance that already applied — and
    /// leaves the session untouched in that case. Dropping the future
    /// before it resolves cancels the advance outright.
    pub async fn auto_advance(&self, session: &mut QuizSession, token: AdvanceToken) -> bool {
        tokio::time::sleep(Duration::from_millis(self.settings.advance_delay_ms())).await;

        let applied = session.advance(token, self.clock.now());
        if applied {
            debug!(
                "advanced to question {}/{}",
                session.current_index(),
                session.total_questions()
            );
        } else {
            debug!("stale auto-advance ignored");
        }
        applied
    }

    /// Restart the session, stamped from the service clock.
    pub fn restart(&self, session: &mut QuizSession) {
        session.restart(self.clock.now());
    }
}
