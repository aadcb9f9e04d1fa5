//! # Axum Helpers
//!
//! Shared HTTP plumbing for the electronics services.
//!
//! - **[`auth`]**: `x-auth-token` issuance, verification and route gates
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body
//! - **[`extractors`]**: JSON extractors rejecting with [`AppError`]
//! - **[`http`]**: correlation ids, security headers, CORS
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes)?;
//! create_production_app(router, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{
    AUTH_TOKEN_HEADER, TokenAuth, TokenClaims, TokenConfig, TokenError, require_admin,
    require_token,
};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal, trim_trailing_slash,
};

pub use http::{CORRELATION_ID_HEADER, correlation_id, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{AppJson, ValidatedJson};
