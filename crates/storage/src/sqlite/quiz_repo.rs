use quiz_core::model::{Quiz, QuizDraft, QuizId};

use super::{SqliteRepository, mapping::map_quiz_row};
use crate::repository::{QuizRepository, StorageError};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait::async_trait]
impl QuizRepository for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, question, answer, created_at, updated_at
            FROM quizzes
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut quizzes = Vec::with_capacity(rows.len());
        for row in rows {
            quizzes.push(map_quiz_row(&row)?);
        }
        Ok(quizzes)
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, question, answer, created_at, updated_at
            FROM quizzes
            WHERE id = ?1
            ",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        row.as_ref().map(map_quiz_row).transpose()
    }

    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StorageError> {
        let validated = draft.validate()?;
        let now = self.clock.now();

        let result = sqlx::query(
            r"
            INSERT INTO quizzes (question, answer, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            ",
        )
        .bind(validated.question.as_str())
        .bind(validated.answer.as_str())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        let id = QuizId::new(result.last_insert_rowid());
        tracing::debug!(%id, "inserted quiz");
        Ok(validated.assign_id(id, now))
    }

    async fn update(&self, id: QuizId, draft: QuizDraft) -> Result<Quiz, StorageError> {
        let validated = draft.validate()?;
        let existing = self.find_by_id(id).await?.ok_or(StorageError::NotFound)?;
        let revised = existing.revise(validated, self.clock.now());

        let result = sqlx::query(
            r"
            UPDATE quizzes
            SET question = ?2, answer = ?3, updated_at = ?4
            WHERE id = ?1
            ",
        )
        .bind(id.value())
        .bind(revised.question())
        .bind(revised.answer())
        .bind(revised.updated_at())
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(revised)
    }

    async fn delete_by_id(&self, id: QuizId) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = ?1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(conn)?;
        tracing::debug!(%id, removed = result.rows_affected(), "deleted quiz");
        Ok(())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quizzes")
            .fetch_one(&self.pool)
            .await
            .map_err(conn)?;
        u64::try_from(total).map_err(|_| StorageError::Serialization("negative count".into()))
    }
}
