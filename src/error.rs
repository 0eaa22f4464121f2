//! Error types and HTTP response mapping.
//!
//! `AppError` is what every handler returns. It wraps the persistence and
//! authentication errors and turns each variant into a JSON body of the shape
//! `{ statusCode, error, message }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use utoipa::ToSchema;

use crate::repository::RepositoryError;

/// ErrorBody
///
/// Wire format for every error response. `message` is a string, or a list of
/// strings for validation failures.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
    #[schema(value_type = Object)]
    pub message: Value,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token is valid but the admin was removed or deactivated since.
    #[error("Admin account not found or inactive")]
    InactiveAccount,

    #[error("Current password is incorrect")]
    WrongPassword,

    #[error("Admin role required")]
    Forbidden,

    #[error("Admin registration is disabled")]
    RegistrationDisabled,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token encoding failed: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken
            | Self::InvalidToken
            | Self::InvalidCredentials
            | Self::InactiveAccount
            | Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::Forbidden | Self::RegistrationDisabled => StatusCode::FORBIDDEN,
            Self::Hashing(_) | Self::TokenEncoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return internal(&self);
        }
        tracing::debug!(error = %self, "authentication rejected");
        error_response(status, Value::String(self.to_string()))
    }
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Every rule a request body broke.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Conflict(String),

    /// Logged in full, returned to the client as a generic message.
    #[error("{0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{what} not found"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Repository(RepositoryError::Serialization(err))
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::BadRequest(err.body_text())
    }
}

/// Raised when a gallery request is not `multipart/form-data` at all.
impl From<axum::extract::multipart::MultipartRejection> for AppError {
    fn from(rejection: axum::extract::multipart::MultipartRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, Value::String(msg)),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, Value::String(msg)),
            Self::Validation(messages) => error_response(StatusCode::BAD_REQUEST, json!(messages)),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, Value::String(msg)),
            // Lost a race with a concurrent write of the same unique value.
            Self::Repository(RepositoryError::Duplicate { field, .. }) => error_response(
                StatusCode::CONFLICT,
                Value::String(format!("A record with this {field} already exists")),
            ),
            err @ (Self::Repository(_) | Self::Internal(_)) => internal(&err),
        }
    }
}

fn error_response(status: StatusCode, message: Value) -> Response {
    let body = ErrorBody {
        status_code: status.as_u16(),
        error: status.canonical_reason().unwrap_or("Error").to_string(),
        message,
    };
    (status, Json(body)).into_response()
}

fn internal(err: &dyn std::fmt::Display) -> Response {
    tracing::error!("internal error: {}", err);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        Value::String("Internal server error".to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_variants() {
        let cases = [
            (AppError::not_found("Course"), StatusCode::NOT_FOUND),
            (AppError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::Validation(vec!["x".into()]), StatusCode::BAD_REQUEST),
            (AppError::Conflict("dup".into()), StatusCode::CONFLICT),
            (
                RepositoryError::Duplicate { collection: "admins", field: "email" }.into(),
                StatusCode::CONFLICT,
            ),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AuthError::InvalidToken.into(), StatusCode::UNAUTHORIZED),
            (AuthError::Forbidden.into(), StatusCode::FORBIDDEN),
            (AuthError::Hashing("x".into()).into(), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn not_found_message() {
        assert_eq!(AppError::not_found("Event").to_string(), "Event not found");
    }
}
