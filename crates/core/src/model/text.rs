use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("el texto no puede estar vacío")]
    Empty,
}

/// Non-empty text tagged with the quiz side it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<T>(String, std::marker::PhantomData<T>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question;
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer;

pub type QuestionText = Text<Question>;
pub type AnswerText = Text<Answer>;

impl<T> Text<T> {
    /// Accepts the text as given; only all-whitespace input is rejected.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` when `s` has no visible characters.
    pub fn parse(s: impl Into<String>) -> Result<Self, TextError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(s, std::marker::PhantomData))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
