use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Map an insert failure, turning a unique-constraint violation into
    /// the field errors the caller would have reported for a duplicate.
    pub fn from_insert(err: DbErr, on_duplicate: impl FnOnce() -> FieldErrors) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Validation(on_duplicate()),
            _ => Self::Db(err.to_string()),
        }
    }
}

impl From<FieldErrors> for ModelError {
    fn from(errors: FieldErrors) -> Self { Self::Validation(errors) }
}
