use chrono::{DateTime, Utc};
use std::fmt;

use vidlearn_core::model::{AttemptLog, Question, QuizSummary};

use super::progress::QuizProgress;
use crate::error::QuizSessionError;

//
// ─── SELECTION & FEEDBACK ──────────────────────────────────────────────────────
//

/// The option picked for the current question, with its evaluation.
///
/// Retained after a wrong pick so the UI can mark the choice; cleared
/// whenever the index advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedOption {
    pub option: String,
    pub is_correct: bool,
}

/// Handle to a single armed auto-advance.
///
/// A token goes stale when the session restarts, when the question is
/// answered again, and once the advance applies — a stale token can never
/// mutate the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken(u64);

/// Immediate outcome of selecting an option.
///
/// `advance` carries the token for the freshly armed auto-advance after a
/// correct answer; it is `None` after a wrong one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub advance: Option<AdvanceToken>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory single-pass quiz session.
///
/// Steps forward-only through an immutable ordered question list: evaluate
/// a selection, arm a deferred advance on success, and restart on demand.
/// The index lives in `[0, total]`; the session is complete exactly when it
/// equals `total`. An empty question list is a valid degenerate session
/// that starts already complete.
///
/// Owned exclusively by the hosting view; every timestamp comes in from
/// the services layer clock to keep time deterministic.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected: Option<SelectedOption>,
    armed: Option<AdvanceToken>,
    next_token: u64,
    attempts: Vec<AttemptLog>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a new session over the supplied question list.
    #[must_use]
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        let completed_at = questions.is_empty().then_some(started_at);
        Self {
            questions,
            current: 0,
            selected: None,
            armed: None,
            next_token: 0,
            attempts: Vec::new(),
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedOption> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.option.as_str())
    }

    /// Whether the last selection on the current question was correct.
    ///
    /// Meaningless (`false`) while nothing is selected.
    #[must_use]
    pub fn last_answer_correct(&self) -> bool {
        self.selected.as_ref().is_some_and(|s| s.is_correct)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Whether an auto-advance is armed and has not been applied yet.
    #[must_use]
    pub fn has_pending_advance(&self) -> bool {
        self.armed.is_some()
    }

    #[must_use]
    pub fn attempts(&self) -> &[AttemptLog] {
        &self.attempts
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.len(),
            answered: self.current,
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Evaluate a selection for the current question.
    ///
    /// Any previously armed advance is cancelled first, so re-selecting
    /// while a delay is pending re-arms instead of stacking timers. Text
    /// that is not among the current options counts as an ordinary wrong
    /// answer. A wrong answer keeps the index in place and retains the
    /// selection; a correct one arms a fresh advance and returns its token.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Completed` after completion; the state is
    /// left untouched.
    pub fn select_option(
        &mut self,
        option: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerFeedback, QuizSessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(QuizSessionError::Completed);
        };

        self.armed = None;
        let is_correct = question.is_correct(option);
        self.selected = Some(SelectedOption {
            option: option.to_owned(),
            is_correct,
        });
        self.attempts
            .push(AttemptLog::new(self.current, option, is_correct, answered_at));

        let advance = is_correct.then(|| self.arm_advance());
        Ok(AnswerFeedback {
            is_correct,
            advance,
        })
    }

    /// Apply a previously armed advance.
    ///
    /// Returns `false` without touching the session when `token` is stale —
    /// after a restart, a re-selection, or an advance that already applied.
    /// On apply the index moves forward, the selection clears, and crossing
    /// the end stamps `completed_at`.
    pub fn advance(&mut self, token: AdvanceToken, advanced_at: DateTime<Utc>) -> bool {
        if self.armed != Some(token) {
            return false;
        }

        self.armed = None;
        self.selected = None;
        self.current += 1;
        if self.current == self.questions.len() {
            self.completed_at = Some(advanced_at);
        }
        true
    }

    /// Reset to the initial state; valid in any state.
    ///
    /// Cancels any armed advance and discards the attempt log. The result
    /// is indistinguishable from a session freshly created at
    /// `restarted_at`.
    pub fn restart(&mut self, restarted_at: DateTime<Utc>) {
        self.current = 0;
        self.selected = None;
        self.armed = None;
        self.attempts.clear();
        self.started_at = restarted_at;
        self.completed_at = self.questions.is_empty().then_some(restarted_at);
    }

    /// Build the aggregate summary of a finished quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::NotCompleted` while the session is still
    /// in progress; propagates `QuizSummaryError` on a malformed log.
    pub fn build_summary(&self) -> Result<QuizSummary, QuizSessionError> {
        let completed_at = self.completed_at.ok_or(QuizSessionError::NotCompleted)?;
        Ok(QuizSummary::from_attempts(
            self.questions.len(),
            self.started_at,
            completed_at,
            &self.attempts,
        )?)
    }

    fn arm_advance(&mut self) -> AdvanceToken {
        self.next_token += 1;
        let token = AdvanceToken(self.next_token);
        self.armed = Some(token);
        token
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("armed", &self.armed)
            .field("attempts_len", &self.attempts.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
