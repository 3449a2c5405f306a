use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::{
    ids::QuizId,
    text::{AnswerText, QuestionText},
};

//
// ─── QUIZ TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated question/answer pair, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub question: String,
    pub answer: String,
}

impl QuizDraft {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Validate both fields, reporting every offending field at once.
    ///
    /// # Errors
    ///
    /// Returns `QuizValidationError` listing each empty field.
    pub fn validate(self) -> Result<ValidatedQuiz, QuizValidationError> {
        let question = QuestionText::parse(self.question);
        let answer = AnswerText::parse(self.answer);

        match (question, answer) {
            (Ok(question), Ok(answer)) => Ok(ValidatedQuiz { question, answer }),
            (question, answer) => {
                let mut fields = Vec::new();
                if question.is_err() {
                    fields.push(FieldError::empty(QuizField::Question));
                }
                if answer.is_err() {
                    fields.push(FieldError::empty(QuizField::Answer));
                }
                Err(QuizValidationError { fields })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuiz {
    pub question: QuestionText,
    pub answer: AnswerText,
}

impl ValidatedQuiz {
    /// Attach a store-assigned id and creation time.
    #[must_use]
    pub fn assign_id(self, id: QuizId, now: DateTime<Utc>) -> Quiz {
        Quiz {
            id,
            question: self.question,
            answer: self.answer,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    question: QuestionText,
    answer: AnswerText,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Quiz {
    /// Rebuild a quiz from stored columns.
    ///
    /// # Errors
    ///
    /// Returns `QuizValidationError` if the stored text is blank.
    pub fn from_persisted(
        id: QuizId,
        question: String,
        answer: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, QuizValidationError> {
        let validated = QuizDraft { question, answer }.validate()?;
        Ok(Self {
            id,
            question: validated.question,
            answer: validated.answer,
            created_at,
            updated_at,
        })
    }

    /// Replace question and answer, keeping id and creation time.
    #[must_use]
    pub fn revise(&self, validated: ValidatedQuiz, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            question: validated.question,
            answer: validated.answer,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizField {
    Question,
    Answer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: QuizField,
    pub message: String,
}

impl FieldError {
    fn empty(field: QuizField) -> Self {
        let message = match field {
            QuizField::Question => "La pregunta no puede estar vacía.",
            QuizField::Answer => "La respuesta no puede estar vacía.",
        };
        Self {
            field,
            message: message.to_owned(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// One entry per field the store refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("El quiz es erróneo ({} campo(s) inválido(s))", .fields.len())]
pub struct QuizValidationError {
    pub fields: Vec<FieldError>,
}

impl QuizValidationError {
    #[must_use]
    pub fn has_field(&self, field: QuizField) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
