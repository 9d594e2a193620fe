//! Quiz document model.
//!
//! A quiz is a JSON array of questions. The `answer` field is always the
//! 0-based index of the correct option; documents using option text as the
//! answer marker are rejected at parse time.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options` of the correct choice.
    pub answer: usize,
    /// Display-only language tag ("en", "ml", ...). Never affects scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// An ordered list of questions forming one quiz.
///
/// Question order defines presentation order and is preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizDocument {
    questions: Vec<QuizQuestion>,
}

impl QuizDocument {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validate the whole document before it is handed to a session.
    ///
    /// A valid document has at least one question; every question has at
    /// least two options and an `answer` index that resolves to one of them.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.questions.is_empty() {
            return Err(DocumentError::Empty);
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(DocumentError::TooFewOptions { question: index });
            }
            if question.answer >= question.options.len() {
                return Err(DocumentError::AnswerOutOfRange { question: index });
            }
        }

        Ok(())
    }
}

/// Why a document failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document contains no questions.
    Empty,
    /// A question has fewer than two options.
    TooFewOptions { question: usize },
    /// A question's answer index points past its options.
    AnswerOutOfRange { question: usize },
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Empty => write!(f, "quiz contains no questions"),
            DocumentError::TooFewOptions { question } => {
                write!(f, "question {} has fewer than two options", question + 1)
            }
            DocumentError::AnswerOutOfRange { question } => {
                write!(f, "question {} has an answer matching no option", question + 1)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, options: &[&str], answer: usize) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer,
            lang: None,
        }
    }

    #[test]
    fn test_parse_sample_document() {
        let json = r#"[
            {
                "question": "What is the capital of Kerala?",
                "options": ["Kochi", "Kozhikode", "Thiruvananthapuram", "Kannur"],
                "answer": 2,
                "lang": "en"
            },
            {
                "question": "Choose the correct option: 2 + 2 = ?",
                "options": ["3", "4", "5", "22"],
                "answer": 1
            }
        ]"#;

        let doc: QuizDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.questions()[0].answer, 2);
        assert_eq!(doc.questions()[0].lang.as_deref(), Some("en"));
        assert_eq!(doc.questions()[1].lang, None);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_question_order_is_preserved() {
        let doc = QuizDocument::new(vec![
            question("first", &["a", "b"], 0),
            question("second", &["a", "b"], 1),
            question("third", &["a", "b"], 0),
        ]);
        let texts: Vec<&str> = doc.questions().iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let doc = QuizDocument::new(vec![]);
        assert_eq!(doc.validate(), Err(DocumentError::Empty));
    }

    #[test]
    fn test_single_option_is_rejected() {
        let doc = QuizDocument::new(vec![question("q", &["only"], 0)]);
        assert_eq!(
            doc.validate(),
            Err(DocumentError::TooFewOptions { question: 0 })
        );
    }

    #[test]
    fn test_answer_out_of_range_is_rejected() {
        let doc = QuizDocument::new(vec![
            question("ok", &["a", "b"], 1),
            question("bad", &["a", "b", "c"], 3),
        ]);
        assert_eq!(
            doc.validate(),
            Err(DocumentError::AnswerOutOfRange { question: 1 })
        );
    }

    #[test]
    fn test_textual_answer_is_rejected_at_parse_time() {
        let json = r#"[{"question": "q", "options": ["a", "b"], "answer": "b"}]"#;
        assert!(serde_json::from_str::<QuizDocument>(json).is_err());
    }
}
