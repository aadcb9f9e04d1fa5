//! Error codes carried in every [`ErrorResponse`](super::ErrorResponse).
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Request body could not be read as the expected JSON
    JsonExtraction,

    /// Requested resource or route was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// Credentials were rejected
    Unauthorized,

    /// Authenticated caller lacks the required privileges
    Forbidden,

    /// Request payload is semantically incorrect
    UnprocessableEntity,

    /// Request body exceeds the route limit
    PayloadTooLarge,

    /// Request was malformed in a way the caller can fix
    BadRequest,

    // Token errors (3000-3999)
    /// Auth token missing, malformed, expired or wrongly signed
    InvalidToken,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidToken => "INVALID_TOKEN",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1999: request errors
    /// - 3000-3999: token errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Unauthorized => 1006,
            Self::Forbidden => 1007,
            Self::UnprocessableEntity => 1009,
            Self::PayloadTooLarge => 1012,
            Self::BadRequest => 1013,
            Self::InvalidToken => 3001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::JsonExtraction => "Invalid request payload",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::Unauthorized => "Authentication required",
            Self::Forbidden => "Access forbidden",
            Self::UnprocessableEntity => "Request cannot be processed",
            Self::PayloadTooLarge => "Request body is too large",
            Self::BadRequest => "Bad request",
            Self::InvalidToken => "unable to parse token",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::InvalidToken.as_str(), "INVALID_TOKEN");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::PayloadTooLarge.code(), 1012);
        assert_eq!(ErrorCode::InvalidToken.code(), 3001);
    }

    #[test]
    fn test_error_code_display_matches_serde() {
        let json = serde_json::to_string(&ErrorCode::PayloadTooLarge).unwrap();
        assert_eq!(json, format!("\"{}\"", ErrorCode::PayloadTooLarge));
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"UNPROCESSABLE_ENTITY\"").unwrap();
        assert_eq!(code, ErrorCode::UnprocessableEntity);
    }
}
