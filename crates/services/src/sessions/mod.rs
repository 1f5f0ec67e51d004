mod progress;
mod service;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizSessionError;
pub use progress::QuizProgress;
pub use service::{AdvanceToken, AnswerFeedback, QuizSession, SelectedOption};
pub use workflow::{QuizAnswerResult, QuizLoopService};
