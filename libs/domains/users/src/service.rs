//! Registration and authentication over a [`DocumentStore`] of users

use axum_helpers::TokenAuth;
use database::mongodb::DocumentStore;
use mongodb::bson::Document;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{Credentials, User, UserResponse};
use crate::password::PasswordHasher;

/// Stored field carrying the unique email
pub const EMAIL_FIELD: &str = "username";

/// A user view plus the token issued for them
#[derive(Debug, Clone)]
pub struct Session {
    pub user: UserResponse,
    pub token: String,
}

pub struct UserService<S: DocumentStore<User>> {
    store: Arc<S>,
    hasher: PasswordHasher,
    tokens: TokenAuth,
}

impl<S: DocumentStore<User>> UserService<S> {
    pub fn new(store: S, hasher: PasswordHasher, tokens: TokenAuth) -> Self {
        Self {
            store: Arc::new(store),
            hasher,
            tokens,
        }
    }

    /// Unique index on the email field; run once before serving.
    pub async fn ensure_indexes(&self) -> UserResult<()> {
        self.store
            .ensure_unique_index(EMAIL_FIELD)
            .await
            .map_err(UserError::Database)
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let mut filter = Document::new();
        filter.insert(EMAIL_FIELD, email);
        Ok(self.store.find_one(filter).await?)
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn register(&self, credentials: Credentials) -> UserResult<Session> {
        credentials.validate()?;

        if self.find_by_email(&credentials.email).await?.is_some() {
            tracing::info!("Registration for existing user refused");
            return Err(UserError::AlreadyExists);
        }

        let hasher = self.hasher.clone();
        let password = credentials.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Internal(format!("hashing task failed: {e}")))??;

        let user = User::new(credentials.email, password_hash);
        // The unique index settles concurrent registrations; a duplicate key
        // converts to AlreadyExists.
        self.store.insert_one(&user).await?;

        let token = self.tokens.issue(&user.email, user.is_admin)?;
        tracing::info!("User registered");

        Ok(Session {
            user: UserResponse::from(&user),
            token,
        })
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn authenticate(&self, credentials: Credentials) -> UserResult<Session> {
        credentials.validate()?;

        let user = self
            .find_by_email(&credentials.email)
            .await?
            .ok_or(UserError::UnknownUser)?;

        let hasher = self.hasher.clone();
        let password = credentials.password;
        let stored = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(|e| UserError::Internal(format!("verification task failed: {e}")))??;

        if !matches {
            tracing::info!("Wrong password");
            return Err(UserError::InvalidPassword);
        }

        let token = self.tokens.issue(&user.email, user.is_admin)?;
        tracing::debug!(is_admin = user.is_admin, "User authenticated");

        Ok(Session {
            user: UserResponse::from(&user),
            token,
        })
    }
}
