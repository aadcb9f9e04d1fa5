//! Cross-cutting HTTP middleware.
//!
//! ```ignore
//! use axum_helpers::http::{correlation_id, cors_layer_from_env, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(correlation_id))
//!     .layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod correlation;
pub mod cors;
pub mod security;

pub use correlation::{CORRELATION_ID_HEADER, correlation_id, generate_correlation_id};
pub use cors::{create_cors_layer, cors_layer_from_env};
pub use security::security_headers;
