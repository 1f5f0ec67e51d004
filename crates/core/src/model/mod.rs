mod question;
mod session;
mod settings;
mod video;

pub use question::{Question, QuestionDraft, QuestionValidationError};
pub use session::{AttemptLog, QuizSummary, QuizSummaryError};
pub use settings::{
    DEFAULT_ADVANCE_DELAY_MS, DEFAULT_QUESTION_COUNT, QuizSettings, QuizSettingsError,
};
pub use video::{VIDEO_ID_LEN, VideoId, VideoReference, VideoUrlError};
