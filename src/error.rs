//! Error types and API response envelope
//!
//! `AppError` is the single error type for the service: domain failures
//! (invalid range, room unavailable, identity conflict, unknown booking)
//! carry their own `ErrorCode`, and storage failures convert from
//! `sqlx::Error` into `DatabaseError` so handlers and the db layer can use
//! `?` propagation without mapping boilerplate.

use axum::response::IntoResponse;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Checkout date is not after check-in date (400)
    InvalidRange,
    /// Room exists but is not available for booking (409)
    RoomUnavailable,
    /// Email and national id match two different customers (409)
    IdentityConflict,
    /// Referenced booking does not exist (404)
    BookingNotFound,
    /// Resource not found (404)
    NotFound,
    /// Request failed validation (400)
    ValidationFailed,
    /// Database error (500)
    DatabaseError,
    /// Internal server error (500)
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRange => StatusCode::BAD_REQUEST,
            Self::RoomUnavailable => StatusCode::CONFLICT,
            Self::IdentityConflict => StatusCode::CONFLICT,
            Self::BookingNotFound => StatusCode::NOT_FOUND,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRange => "E1001",
            Self::RoomUnavailable => "E1002",
            Self::IdentityConflict => "E1003",
            Self::BookingNotFound => "E1004",
            Self::NotFound => "E0003",
            Self::ValidationFailed => "E0002",
            Self::DatabaseError => "E9002",
            Self::InternalError => "E9001",
        }
    }

    /// Get the default message for this error
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidRange => "Checkout date must be after check-in date",
            Self::RoomUnavailable => "Room is not available",
            Self::IdentityConflict => "Email and national id belong to different customers",
            Self::BookingNotFound => "Booking not found",
            Self::NotFound => "Resource not found",
            Self::ValidationFailed => "Validation failed",
            Self::DatabaseError => "Database error",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Application error with structured error code
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    pub fn invalid_range() -> Self {
        Self::new(ErrorCode::InvalidRange)
    }

    pub fn room_unavailable(room_number: i64) -> Self {
        Self::with_message(
            ErrorCode::RoomUnavailable,
            format!("Room {room_number} is not available"),
        )
    }

    pub fn identity_conflict() -> Self {
        Self::new(ErrorCode::IdentityConflict)
    }

    pub fn booking_not_found(booking_id: i64) -> Self {
        Self::with_message(
            ErrorCode::BookingNotFound,
            format!("Booking {booking_id} not found"),
        )
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        Self::new(ErrorCode::DatabaseError)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.code.http_status();
        let body = ApiResponse::<()>::error(self.code.code(), self.message);
        (status, axum::Json(body)).into_response()
    }
}

/// Error response envelope
///
/// Success responses are the payload JSON directly; failures carry a stable
/// code plus message:
/// ```json
/// {
///     "code": "E1002",
///     "message": "Room 101 is not available"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code string
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidRange.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::RoomUnavailable.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::IdentityConflict.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::BookingNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes_are_unique() {
        let codes = [
            ErrorCode::InvalidRange,
            ErrorCode::RoomUnavailable,
            ErrorCode::IdentityConflict,
            ErrorCode::BookingNotFound,
            ErrorCode::NotFound,
            ErrorCode::ValidationFailed,
            ErrorCode::DatabaseError,
            ErrorCode::InternalError,
        ];
        let mut strings: Vec<&str> = codes.iter().map(|c| c.code()).collect();
        strings.sort();
        strings.dedup();
        assert_eq!(strings.len(), codes.len());
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let body = ApiResponse::<()>::error("E1004", "Booking 42 not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "E1004");
        assert_eq!(json["message"], "Booking 42 not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_booking_not_found_message() {
        let err = AppError::booking_not_found(42);
        assert_eq!(err.code, ErrorCode::BookingNotFound);
        assert_eq!(err.message, "Booking 42 not found");
    }
}
