use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong on the server!";
const DATABASE_FAILURE_MESSAGE: &str = "Database operation failed.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    #[error("{context}")]
    StoreFailure {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Internal server error")]
    InternalError(#[source] anyhow::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String, message: String },
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let mut payload = serde_json::json!({
            "error": self.public_message(),
        });

        if let Some(details) = self.store_details() {
            payload["details"] = serde_json::Value::String(details);
        }

        HttpResponse::build(self.status_code()).json(payload)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_)
            | AppError::StoreFailure { .. }
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::StoreFailure { .. } => "STORE_FAILURE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Labels a raw store error with the operation that failed. Other
    /// variants pass through untouched.
    pub fn in_context(self, context: impl Into<String>) -> Self {
        match self {
            AppError::DatabaseError(source) => AppError::StoreFailure {
                context: context.into(),
                source,
            },
            other => other,
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) => DATABASE_FAILURE_MESSAGE.to_string(),
            AppError::StoreFailure { context, .. } => context.clone(),
            AppError::InternalError(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            AppError::NotFound(message) | AppError::BadRequest(message) => message.clone(),
            AppError::ValidationError { message, .. } => message.clone(),
            AppError::ServiceUnavailable { message, .. } => message.clone(),
        }
    }

    fn store_details(&self) -> Option<String> {
        match self {
            AppError::DatabaseError(source) | AppError::StoreFailure { source, .. } => {
                Some(store_error_message(source))
            }
            _ => None,
        }
    }
}

fn store_error_message(error: &sqlx::Error) -> String {
    match error {
        sqlx::Error::Database(database_error) => database_error.message().to_string(),
        other => other.to_string(),
    }
}

pub type AppResult<T> = Result<T, AppError>;
