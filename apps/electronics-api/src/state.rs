//! Shared application state.

use axum_helpers::TokenAuth;
use mongodb::{Client, Database};

/// Built once in `main`; clones share the connection pool and signing keys.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
    pub token_auth: TokenAuth,
}
