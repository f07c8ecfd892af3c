use axum_helpers::{Classify, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid data: {0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl Classify for UserError {
    fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_) => ErrorKind::InvalidPayload,
            UserError::PasswordHash(_) | UserError::Database(_) => ErrorKind::InternalFault,
        }
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}
