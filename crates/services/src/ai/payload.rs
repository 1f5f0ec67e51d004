use serde::Deserialize;

use vidlearn_core::model::{Question, QuestionDraft};

use crate::error::QuestionSourceError;

/// Wire shape of a generated quiz for one video.
///
/// Each entry deserializes into a `QuestionDraft` (`question`, `options`,
/// `answer`) and is validated before it can reach a session.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizPayload {
    pub questions: Vec<QuestionDraft>,
}

impl QuizPayload {
    /// Validate every question in the payload.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError::EmptyResponse` for an empty list and
    /// propagates the first question validation failure.
    pub fn validate(self) -> Result<Vec<Question>, QuestionSourceError> {
        if self.questions.is_empty() {
            return Err(QuestionSourceError::EmptyResponse);
        }
        self.questions
            .into_iter()
            .map(|draft| draft.validate().map_err(Into::into))
            .collect()
    }
}

/// Wire shape of a generated summary for one video.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryPayload {
    pub summary: String,
}

impl SummaryPayload {
    /// Extract the summary text.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError::EmptyResponse` for blank content.
    pub fn validate(self) -> Result<String, QuestionSourceError> {
        let text = self.summary.trim();
        if text.is_empty() {
            return Err(QuestionSourceError::EmptyResponse);
        }
        Ok(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_validates_into_questions() {
        let json = r#"{
            "questions": [
                {
                    "question": "Who painted the Mona Lisa?",
                    "options": ["Vincent van Gogh", "Pablo Picasso", "Leonardo da Vinci"],
                    "answer": "Leonardo da Vinci"
                }
            ]
        }"#;
        let payload: QuizPayload = serde_json::from_str(json).unwrap();
        let questions = payload.validate().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer(), "Leonardo da Vinci");
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let payload: QuizPayload = serde_json::from_str(r#"{"questions": []}"#).unwrap();
        assert!(matches!(
            payload.validate().unwrap_err(),
            QuestionSourceError::EmptyResponse
        ));
    }

    #[test]
    fn malformed_question_fails_validation() {
        let json = r#"{
            "questions": [
                {"question": "Q?", "options": ["A", "B"], "answer": "C"}
            ]
        }"#;
        let payload: QuizPayload = serde_json::from_str(json).unwrap();
        assert!(matches!(
            payload.validate().unwrap_err(),
            QuestionSourceError::InvalidQuestion(_)
        ));
    }

    #[test]
    fn blank_summary_is_rejected() {
        let payload: SummaryPayload = serde_json::from_str(r#"{"summary": "  "}"#).unwrap();
        assert!(payload.validate().is_err());

        let payload: SummaryPayload =
            serde_json::from_str(r#"{"summary": " key ideas "}"#).unwrap();
        assert_eq!(payload.validate().unwrap(), "key ideas");
    }
}
