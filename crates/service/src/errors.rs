use models::validation::FieldErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Field errors carried by this error, whichever layer raised them.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(e) | Self::Model(models::errors::ModelError::Validation(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(errors: FieldErrors) -> Self { Self::Validation(errors) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(err: sea_orm::DbErr) -> Self { Self::Db(err.to_string()) }
}
