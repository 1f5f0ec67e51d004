use thiserror::Error;

/// Delay between a correct answer and the automatic advance to the next
/// question.
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1_000;

/// How many questions to request from the content boundary per video.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

const MAX_ADVANCE_DELAY_MS: u64 = 600_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("advance delay must be between 1 ms and 600000 ms")]
    InvalidAdvanceDelay,

    #[error("question count must be > 0")]
    InvalidQuestionCount,
}

/// Tunables for a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    advance_delay_ms: u64,
    question_count: u32,
}

impl QuizSettings {
    /// Creates custom quiz settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the delay is zero or longer than ten minutes, or
    /// the question count is zero.
    pub fn new(advance_delay_ms: u64, question_count: u32) -> Result<Self, QuizSettingsError> {
        if advance_delay_ms == 0 || advance_delay_ms > MAX_ADVANCE_DELAY_MS {
            return Err(QuizSettingsError::InvalidAdvanceDelay);
        }
        if question_count == 0 {
            return Err(QuizSettingsError::InvalidQuestionCount);
        }
        Ok(Self {
            advance_delay_ms,
            question_count,
        })
    }

    #[must_use]
    pub fn advance_delay_ms(&self) -> u64 {
        self.advance_delay_ms
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            advance_delay_ms: DEFAULT_ADVANCE_DELAY_MS,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}
