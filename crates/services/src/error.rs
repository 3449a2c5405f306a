//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::InputError;
use quiz_core::model::QuizId;
use storage::repository::StorageError;

use crate::console::ConsoleError;

/// Everything a command pipeline can fail with.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrainerError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("No existe un quiz asociado al id={0}.")]
    NotFound(QuizId),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Console(#[from] ConsoleError),
}
