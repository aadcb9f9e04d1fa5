use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use super::jwt::{AUTH_TOKEN_HEADER, TokenAuth, TokenClaims, TokenError};
use crate::errors::AppError;

fn verify_header(auth: &TokenAuth, headers: &HeaderMap) -> Result<TokenClaims, TokenError> {
    let token = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(TokenError::Missing)?;

    auth.verify(token)
}

/// Rejects requests without a valid `x-auth-token`.
///
/// Claims are not forwarded to the handler.
pub async fn require_token(
    State(auth): State<TokenAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    verify_header(&auth, request.headers()).inspect_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
    })?;

    Ok(next.run(request).await)
}

/// Like [`require_token`], and additionally requires the `authorized` claim.
pub async fn require_admin(
    State(auth): State<TokenAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = verify_header(&auth, request.headers())?;

    if !claims.authorized {
        tracing::info!(user_id = %claims.user_id, "Admin route refused");
        return Err(AppError::Forbidden("admin privileges required".to_string()));
    }

    Ok(next.run(request).await)
}
