#![forbid(unsafe_code)]

pub mod ai;
pub mod error;
pub mod sessions;

pub use vidlearn_core::Clock;
pub use sessions as session;

pub use ai::{HttpQuestionSource, HttpSourceConfig, InMemoryQuestionSource, QuestionSource};
pub use error::{QuestionSourceError, QuizError, QuizSessionError};

pub use sessions::{
    AdvanceToken, AnswerFeedback, QuizAnswerResult, QuizLoopService, QuizProgress, QuizSession,
    SelectedOption,
};
