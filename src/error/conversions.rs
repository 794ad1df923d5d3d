use crate::error::app_error::AppError;
use crate::error::validation_mapping::first_failure_message;

impl From<crate::domain::DomainError> for AppError {
    fn from(err: crate::domain::DomainError) -> Self {
        match err {
            crate::domain::DomainError::ValidationError(msg) => AppError::validation_error(msg),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let message = first_failure_message(&err)
            .unwrap_or_else(|| "Request validation failed".to_string());

        AppError::validation_error(message)
    }
}
