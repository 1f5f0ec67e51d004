use serde::Deserialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionValidationError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {0}")]
    NotEnoughOptions(usize),

    #[error("option text cannot be empty")]
    EmptyOption,

    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),

    #[error("answer {0:?} is not one of the options")]
    AnswerNotInOptions(String),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question shape as supplied by the external content boundary.
///
/// Field names follow the generated wire format: `question`, `options`,
/// `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            answer: answer.into(),
        }
    }

    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionValidationError` if the prompt is blank, there are
    /// fewer than two options, an option is blank or duplicated, or the
    /// answer is not one of the options.
    pub fn validate(self) -> Result<Question, QuestionValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionValidationError::EmptyPrompt);
        }
        if self.options.len() < 2 {
            return Err(QuestionValidationError::NotEnoughOptions(
                self.options.len(),
            ));
        }
        for (i, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionValidationError::EmptyOption);
            }
            if self.options[..i].contains(option) {
                return Err(QuestionValidationError::DuplicateOption(option.clone()));
            }
        }
        if !self.options.contains(&self.answer) {
            return Err(QuestionValidationError::AnswerNotInOptions(self.answer));
        }

        Ok(Question {
            prompt: self.prompt,
            options: self.options,
            answer: self.answer,
        })
    }
}

/// A validated multiple-choice question.
///
/// Immutable for the lifetime of a session; the answer is guaranteed to be
/// exactly one of the options, and option order is preserved as generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.answer
    }

    /// Whether the given text exactly matches the correct answer.
    ///
    /// Text that is not among the options compares unequal like any other
    /// wrong pick; the engine never distinguishes the two.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft::new(
            "What is the capital of France?",
            vec![
                "Paris".to_owned(),
                "London".to_owned(),
                "Berlin".to_owned(),
                "Madrid".to_owned(),
            ],
            "Paris",
        )
    }

    #[test]
    fn valid_draft_passes() {
        let question = draft().validate().unwrap();
        assert_eq!(question.prompt(), "What is the capital of France?");
        assert_eq!(question.options().len(), 4);
        assert_eq!(question.correct_answer(), "Paris");
        assert!(question.is_correct("Paris"));
        assert!(!question.is_correct("London"));
        assert!(!question.is_correct("paris"));
    }

    #[test]
    fn blank_prompt_fails() {
        let mut d = draft();
        d.prompt = "   ".to_owned();
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionValidationError::EmptyPrompt
        ));
    }

    #[test]
    fn single_option_fails() {
        let mut d = draft();
        d.options = vec!["Paris".to_owned()];
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionValidationError::NotEnoughOptions(1)
        ));
    }

    #[test]
    fn duplicate_option_fails() {
        let mut d = draft();
        d.options.push("Paris".to_owned());
        let err = d.validate().unwrap_err();
        assert!(matches!(err, QuestionValidationError::DuplicateOption(o) if o == "Paris"));
    }

    #[test]
    fn answer_outside_options_fails() {
        let mut d = draft();
        d.answer = "Rome".to_owned();
        let err = d.validate().unwrap_err();
        assert!(matches!(err, QuestionValidationError::AnswerNotInOptions(a) if a == "Rome"));
    }

    #[test]
    fn draft_deserializes_from_wire_names() {
        let json = r#"{
            "question": "What is the largest ocean on Earth?",
            "options": ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean", "Pacific Ocean"],
            "answer": "Pacific Ocean"
        }"#;
        let d: QuestionDraft = serde_json::from_str(json).unwrap();
        let question = d.validate().unwrap();
        assert_eq!(question.correct_answer(), "Pacific Ocean");
    }
}
