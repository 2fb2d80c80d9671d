//! Error types and their HTTP mapping
//!
//! Every failure leaving a handler is an [`AppError`], rendered as
//! `{"error": {"code": ..., "message": ...}}` with a matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    constants::{SUBMISSION_URL_HASH_CONSTRAINT, SUBMISSION_USER_PROBLEM_CONSTRAINT},
    services::VerificationError,
};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Bad input
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    InvalidUrl(String),

    #[error("Could not determine the problem's HackerRank challenge")]
    UnknownProblem,

    // Records
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("This submission link has already been used by another student. Please submit the unique link of the problem you solved.")]
    DuplicateSubmissionUrl,

    #[error("Submission rejected: {0}")]
    SubmissionRejected(String),

    // Infrastructure
    #[error("Database error: {0}")]
    Database(String),

    #[error("HackerRank is unavailable: {0}")]
    ExternalUnavailable(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::UnknownProblem => "UNKNOWN_PROBLEM",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::DuplicateSubmissionUrl => "DUPLICATE_SUBMISSION_URL",
            Self::SubmissionRejected(_) => "SUBMISSION_REJECTED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ExternalUnavailable(_) => "EXTERNAL_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::UnknownProblem | Self::SubmissionRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) | Self::DuplicateSubmissionUrl => StatusCode::CONFLICT,
            Self::ExternalUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Server-side details stay in the logs
        let message = match self {
            AppError::Internal(e) => {
                tracing::error!(code, error = ?e, "Unhandled error");
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!(code, error = %e, "Database failure");
                "A database error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                match db_err.constraint() {
                    Some(SUBMISSION_URL_HASH_CONSTRAINT) => AppError::DuplicateSubmissionUrl,
                    // Lost a race against a concurrent first submission
                    Some(SUBMISSION_USER_PROBLEM_CONSTRAINT) => AppError::AlreadyExists(
                        "A submission for this problem is already being recorded".to_string(),
                    ),
                    _ => AppError::AlreadyExists("Resource already exists".to_string()),
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<VerificationError> for AppError {
    fn from(err: VerificationError) -> Self {
        match err {
            VerificationError::InvalidUrl(message) => AppError::InvalidUrl(message),
            VerificationError::UnknownProblem => AppError::UnknownProblem,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
