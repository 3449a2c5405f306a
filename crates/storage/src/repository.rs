use async_trait::async_trait;
use quiz_core::Clock;
use quiz_core::model::{Quiz, QuizDraft, QuizId, QuizValidationError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("no existe el registro")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] QuizValidationError),

    #[error("error de conexión: {0}")]
    Connection(String),

    #[error("error de serialización: {0}")]
    Serialization(String),
}

/// Repository contract for quizzes.
///
/// `create` and `update` validate their draft and refuse blank fields with
/// `StorageError::Validation`, one entry per offending field.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// All quizzes in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError>;

    /// Fetch a quiz by ID, `None` if no such quiz exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StorageError>;

    /// Validate and insert a new quiz, assigning it a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Validation` for blank fields, or other storage errors.
    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StorageError>;

    /// Validate and overwrite the question and answer of an existing quiz.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Validation` for blank fields and
    /// `StorageError::NotFound` if the quiz is gone.
    async fn update(&self, id: QuizId, draft: QuizDraft) -> Result<Quiz, StorageError>;

    /// Remove a quiz. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn delete_by_id(&self, id: QuizId) -> Result<(), StorageError>;

    /// Number of stored quizzes.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn count(&self) -> Result<u64, StorageError>;
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    quizzes: BTreeMap<QuizId, Quiz>,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    clock: Clock,
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl QuizRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError> {
        let guard = self.lock()?;
        Ok(guard.quizzes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StorageError> {
        let guard = self.lock()?;
        Ok(guard.quizzes.get(&id).cloned())
    }

    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StorageError> {
        let validated = draft.validate()?;
        let mut guard = self.lock()?;
        guard.last_id += 1;
        let quiz = validated.assign_id(QuizId::new(guard.last_id), self.clock.now());
        guard.quizzes.insert(quiz.id(), quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, id: QuizId, draft: QuizDraft) -> Result<Quiz, StorageError> {
        let validated = draft.validate()?;
        let mut guard = self.lock()?;
        let slot = guard.quizzes.get_mut(&id).ok_or(StorageError::NotFound)?;
        *slot = slot.revise(validated, self.clock.now());
        Ok(slot.clone())
    }

    async fn delete_by_id(&self, id: QuizId) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        guard.quizzes.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let guard = self.lock()?;
        Ok(guard.quizzes.len() as u64)
    }
}

/// Holds the quiz repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub quizzes: Arc<dyn QuizRepository>,
}
