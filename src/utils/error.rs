use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    MalformedInput,
    ValidationError(String),
    DuplicateEmail,
    /// `malformed_id` só escolhe a mensagem; o status é o mesmo.
    NotFound { malformed_id: bool },
    SerializationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MalformedInput => write!(f, "invalid json format"),
            AppError::ValidationError(msg) => write!(f, "{}", msg),
            AppError::DuplicateEmail => write!(f, "email already exists"),
            AppError::NotFound { malformed_id: true } => write!(f, "invalid id"),
            AppError::NotFound { malformed_id: false } => write!(f, "user not found"),
            AppError::SerializationError(_) => write!(f, "error occurred while encoding to json"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AppError::DuplicateEmail,
            StoreError::NotFound(_) => AppError::NotFound { malformed_id: false },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MalformedInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::NotFound { malformed_id: true }.status_code(),
            AppError::NotFound { malformed_id: false }.status_code()
        );
        assert_eq!(
            AppError::SerializationError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_errors_map_to_app_errors() {
        assert!(matches!(AppError::from(StoreError::DuplicateEmail), AppError::DuplicateEmail));
        assert_eq!(AppError::from(StoreError::NotFound(7)).to_string(), "user not found");
    }
}
