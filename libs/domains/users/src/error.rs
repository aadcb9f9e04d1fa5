use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, TokenError};
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::password::PasswordError;

#[derive(Debug, Error)]
pub enum UserError {
    /// Registration for an email that is already stored
    #[error("User already exists")]
    AlreadyExists,

    #[error("User doesn't exist")]
    UnknownUser,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid credentials: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    Database(DatabaseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<DatabaseError> for UserError {
    fn from(err: DatabaseError) -> Self {
        if err.is_duplicate_key() {
            UserError::AlreadyExists
        } else {
            UserError::Database(err)
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::AlreadyExists | UserError::UnknownUser => AppError::BadRequest(err.to_string()),
            UserError::InvalidPassword => AppError::Unauthorized(err.to_string()),
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::Token(e) => e.into(),
            UserError::Password(e) => {
                tracing::error!(error = %e, "Password hashing failed");
                AppError::InternalServerError("unable to process the password".to_string())
            }
            UserError::Database(e) => {
                tracing::error!(error = %e, "User store failure");
                AppError::InternalServerError("unable to access the users".to_string())
            }
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
