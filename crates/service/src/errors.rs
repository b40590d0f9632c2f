use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("seed error: {0}")]
    Seed(String),
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        Self::Model(e.into())
    }
}

impl ServiceError {
    /// True when the database refused a duplicate unique key.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Model(models::errors::ModelError::UniqueViolation(_)))
    }
}
