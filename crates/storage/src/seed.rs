//! Starter quizzes for an empty store.

use quiz_core::model::QuizDraft;

use crate::repository::{QuizRepository, StorageError};

/// The four capital questions a fresh database starts with.
#[must_use]
pub fn default_quizzes() -> Vec<QuizDraft> {
    vec![
        QuizDraft::new("Capital de Italia", "Roma"),
        QuizDraft::new("Capital de Francia", "París"),
        QuizDraft::new("Capital de España", "Madrid"),
        QuizDraft::new("Capital de Portugal", "Lisboa"),
    ]
}

/// Insert `drafts` only when the store holds no quizzes yet.
///
/// Returns how many quizzes were inserted.
///
/// # Errors
///
/// Returns `StorageError` if counting or inserting fails.
pub async fn seed_if_empty(
    repo: &dyn QuizRepository,
    drafts: Vec<QuizDraft>,
) -> Result<usize, StorageError> {
    if repo.count().await? > 0 {
        tracing::debug!("store already populated; skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for draft in drafts {
        repo.create(draft).await?;
        inserted += 1;
    }
    tracing::info!(inserted, "seeded empty quiz store");
    Ok(inserted)
}
