mod http;
mod memory;
mod payload;
mod source;

pub use http::{HttpQuestionSource, HttpSourceConfig};
pub use memory::InMemoryQuestionSource;
pub use payload::{QuizPayload, SummaryPayload};
pub use source::QuestionSource;
