//! Signed access tokens and the middleware that gates routes on them.
//!
//! Tokens travel in the `x-auth-token` header in both directions: issued on
//! registration and authentication, required on mutating routes.
//!
//! ```ignore
//! use axum::middleware::from_fn_with_state;
//! use axum_helpers::auth::{TokenAuth, TokenConfig, require_admin, require_token};
//!
//! let auth = TokenAuth::new(&TokenConfig::from_env()?);
//! let admin_only = Router::new()
//!     .route("/products/{id}", delete(remove))
//!     .route_layer(from_fn_with_state(auth.clone(), require_admin));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::TokenConfig;
pub use jwt::{AUTH_TOKEN_HEADER, TOKEN_TTL_SECS, TokenAuth, TokenClaims, TokenError};
pub use middleware::{require_admin, require_token};
