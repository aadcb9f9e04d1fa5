use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorCode};

/// Router fallback answering 404 with an [`ErrorResponse`](super::ErrorResponse).
pub async fn not_found() -> Response {
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string()).into_response()
}
