use quiz_core::model::{Quiz, QuizId};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn quiz_id_from_i64(v: i64) -> Result<QuizId, StorageError> {
    if v <= 0 {
        return Err(StorageError::Serialization(format!("invalid quiz id: {v}")));
    }
    Ok(QuizId::new(v))
}

pub(crate) fn map_quiz_row(row: &sqlx::sqlite::SqliteRow) -> Result<Quiz, StorageError> {
    Quiz::from_persisted(
        quiz_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        row.try_get::<String, _>("question").map_err(ser)?,
        row.try_get::<String, _>("answer").map_err(ser)?,
        row.try_get("created_at").map_err(ser)?,
        row.try_get("updated_at").map_err(ser)?,
    )
    .map_err(ser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_ids_must_be_positive() {
        assert!(quiz_id_from_i64(0).is_err());
        assert!(quiz_id_from_i64(-1).is_err());
        assert_eq!(quiz_id_from_i64(3).unwrap(), QuizId::new(3));
    }
}
