//! Error types for the task API.
//!
//! `TaskError` is what the store layer returns; `ApiError` is what handlers return and
//! renders as an [`ErrorResponse`] body with the matching HTTP status.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::{catalog::ErrorCode, dtos::ErrorResponse, validation::TASK_NAME_FIELD};

/// Main error type for task operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// Connection pool errors
    #[error("Connection pool error: {0}")]
    Pool(String),

    /// No task with this id
    #[error("Task not found: {0}")]
    TaskNotFound(i32),

    /// Unique constraint on the task name was violated
    #[error("Task name already exists: {0}")]
    DuplicateName(String),

    /// The configured maximum number of tasks exists already
    #[error("Task capacity reached: at most {max} tasks")]
    CapacityReached { max: i64 },

    /// Internal error (unexpected)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error type for API operations (converts to HTTP responses).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(ErrorResponse),

    #[error("Forbidden: {0}")]
    Forbidden(ErrorResponse),

    #[error("Not found: {0}")]
    NotFound(ErrorResponse),

    #[error("Conflict: {0}")]
    Conflict(ErrorResponse),
}

impl ApiError {
    pub fn body(&self) -> &ErrorResponse {
        match self {
            ApiError::BadRequest(body)
            | ApiError::Forbidden(body)
            | ApiError::NotFound(body)
            | ApiError::Conflict(body) => body,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::TaskNotFound(id) => ApiError::NotFound(ErrorResponse::for_parameter(
                ErrorCode::NotFound,
                "id",
                id.to_string(),
            )),
            TaskError::DuplicateName(name) => {
                log::info!("Task name duplicated: {}", name);
                ApiError::Conflict(ErrorResponse::for_parameter(
                    ErrorCode::Duplicate,
                    TASK_NAME_FIELD,
                    name,
                ))
            }
            TaskError::CapacityReached { max } => {
                log::info!("Task creation rejected, capacity of {} reached", max);
                ApiError::Forbidden(ErrorResponse::unattributed(ErrorCode::CapacityReached))
            }
            TaskError::Database(e) => {
                log::error!("Database error: {}", e);
                ApiError::Conflict(ErrorResponse::unattributed(ErrorCode::Internal))
            }
            TaskError::Pool(e) => {
                log::error!("Pool error: {}", e);
                ApiError::Conflict(ErrorResponse::unattributed(ErrorCode::Internal))
            }
            TaskError::Internal(e) => {
                log::error!("Internal error: {}", e);
                ApiError::Conflict(ErrorResponse::unattributed(ErrorCode::Internal))
            }
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
