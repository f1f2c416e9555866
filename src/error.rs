use crate::domain::user::UserId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on `{field}`: {message}")]
    ValidationError {
        field: &'static str,
        message: String,
    },
    #[error("User not found with id: {0}")]
    NotFound(UserId),
    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Notification error: {0}")]
    NotificationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
