use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many attempts for a single quiz: {len}")]
    TooManyAttempts { len: usize },

    #[error("too many questions for a single quiz: {len}")]
    TooManyQuestions { len: usize },

    #[error("attempt references question {index} of {total}")]
    AttemptOutOfRange { index: usize, total: usize },
}

/// Record of a single answer attempt.
///
/// One is appended per option selection, including repeated attempts on the
/// same question after a wrong pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptLog {
    pub question_index: usize,
    pub option: String,
    pub was_correct: bool,
    pub attempted_at: DateTime<Utc>,
}

impl AttemptLog {
    #[must_use]
    pub fn new(
        question_index: usize,
        option: impl Into<String>,
        was_correct: bool,
        attempted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question_index,
            option: option.into(),
            was_correct,
            attempted_at,
        }
    }
}

/// Aggregate outcome of a completed quiz, for the hosting view to render.
///
/// Never persisted; a restart discards it together with the attempt log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    total_questions: u32,
    total_attempts: u32,
    correct_first_attempt: u32,
    wrong_attempts: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary from the attempt log of a finished quiz.
    ///
    /// A question counts towards `correct_first_attempt` when the earliest
    /// attempt recorded for it was correct.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, `TooManyAttempts` if the log cannot fit in
    /// `u32`, and `AttemptOutOfRange` if an attempt references a question
    /// index outside the quiz.
    pub fn from_attempts(
        total_questions: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        attempts: &[AttemptLog],
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        let total_attempts = u32::try_from(attempts.len())
            .map_err(|_| QuizSummaryError::TooManyAttempts { len: attempts.len() })?;
        let total = u32::try_from(total_questions)
            .map_err(|_| QuizSummaryError::TooManyQuestions { len: total_questions })?;

        let mut seen = vec![false; total_questions];
        let mut correct_first_attempt = 0_u32;
        let mut wrong_attempts = 0_u32;

        for attempt in attempts {
            let index = attempt.question_index;
            if index >= total_questions {
                return Err(QuizSummaryError::AttemptOutOfRange {
                    index,
                    total: total_questions,
                });
            }
            if !seen[index] {
                seen[index] = true;
                if attempt.was_correct {
                    correct_first_attempt = correct_first_attempt.saturating_add(1);
                }
            }
            if !attempt.was_correct {
                wrong_attempts = wrong_attempts.saturating_add(1);
            }
        }

        Ok(Self {
            total_questions: total,
            total_attempts,
            correct_first_attempt,
            wrong_attempts,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    #[must_use]
    pub fn correct_first_attempt(&self) -> u32 {
        self.correct_first_attempt
    }

    #[must_use]
    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn summary_counts_first_attempts() {
        let now = fixed_now();
        let attempts = vec![
            AttemptLog::new(0, "Paris", true, now),
            AttemptLog::new(1, "Atlantic Ocean", false, now),
            AttemptLog::new(1, "Pacific Ocean", true, now),
            AttemptLog::new(2, "Leonardo da Vinci", true, now),
        ];

        let summary = QuizSummary::from_attempts(3, now, now, &attempts).unwrap();

        assert_eq!(summary.total_questions(), 3);
        assert_eq!(summary.total_attempts(), 4);
        assert_eq!(summary.correct_first_attempt(), 2);
        assert_eq!(summary.wrong_attempts(), 1);
    }

    #[test]
    fn inverted_time_range_is_rejected() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::seconds(10);
        let err = QuizSummary::from_attempts(1, now, earlier, &[]).unwrap_err();
        assert!(matches!(err, QuizSummaryError::InvalidTimeRange));
    }

    #[test]
    fn out_of_range_attempt_is_rejected() {
        let now = fixed_now();
        let attempts = vec![AttemptLog::new(5, "x", true, now)];
        let err = QuizSummary::from_attempts(2, now, now, &attempts).unwrap_err();
        assert!(matches!(
            err,
            QuizSummaryError::AttemptOutOfRange { index: 5, total: 2 }
        ));
    }

    #[test]
    fn empty_quiz_summarizes_to_zeroes() {
        let now = fixed_now();
        let summary = QuizSummary::from_attempts(0, now, now, &[]).unwrap();
        assert_eq!(summary.total_questions(), 0);
        assert_eq!(summary.correct_first_attempt(), 0);
    }
}
