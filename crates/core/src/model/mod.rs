mod ids;
mod quiz;
mod text;

pub use ids::QuizId;
pub use quiz::{FieldError, Quiz, QuizDraft, QuizField, QuizValidationError, ValidatedQuiz};
pub use text::{Answer, AnswerText, Question, QuestionText, Text, TextError};
