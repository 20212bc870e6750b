//! API error responses.

use axum::{
    Json,
    extract::multipart::MultipartError,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hackathons_api_types::ErrorResponse;
use hackathons_core::domain::{AuthError, DomainError};
use tracing::{error, warn};

use crate::storage::StorageError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    message: String,
    code: &'static str,
    status: StatusCode,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "NOT_FOUND",
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "VALIDATION_ERROR",
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self {
            message: err.to_string(),
            code: "UNAUTHORIZED",
            status: StatusCode::UNAUTHORIZED,
        }
    }
}

/// Store failures are logged in full and reported without detail.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        error!(error = ?err, "database error");
        Self {
            message: "a database error occurred".to_string(),
            code: "DATABASE_ERROR",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        error!(error = %err, "storage error");
        Self {
            message: "failed to store the uploaded file".to_string(),
            code: "STORAGE_ERROR",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        warn!(error = %err, "malformed multipart upload");
        Self {
            message: err.body_text(),
            code: "VALIDATION_ERROR",
            status: err.status(),
        }
    }
}

/// Every JSON body rejection, including a missing content type, is a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), error = %rejection.body_text(), "rejected request body");
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            code: self.code.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = ApiError::from(DomainError::MissingField("name"));

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn store_failures_hide_details() {
        let err = ApiError::from(anyhow::anyhow!("connection refused"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "a database error occurred");
    }

    #[test]
    fn auth_failures_map_to_unauthorized() {
        let err = ApiError::from(AuthError::InvalidCredentials);

        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.code(), "UNAUTHORIZED");
    }
}
