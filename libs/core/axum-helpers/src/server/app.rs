use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Json, Router, ServiceExt, extract::Request, middleware, routing::get};
use core_config::{ConfigError, server::ServerConfig};
use std::io;
use std::time::Duration;
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Wraps `apis` with documentation routes and the shared middleware stack.
///
/// - `GET /api-docs/openapi.json` and a Scalar UI at `/scalar`
/// - request tracing, security headers and response compression
/// - CORS when `CORS_ALLOWED_ORIGIN` is set
/// - a JSON 404 fallback
///
/// Routes are mounted as given, without a prefix.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` holds an invalid origin.
pub fn create_router<T>(apis: Router) -> Result<Router, ConfigError>
where
    T: OpenApi + 'static,
{
    let spec = T::openapi();

    let router = Router::new()
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .route(OPENAPI_PATH, get(move || async move { Json(spec) }))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = match cors_layer_from_env()? {
        Some(cors) => router.layer(cors),
        None => router,
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Strips trailing slashes before routing, so `/products/` reaches `/products`.
///
/// Must wrap the whole router: a layer added with `Router::layer` runs after
/// routing and cannot change which route matches.
pub fn trim_trailing_slash(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Serves `router` until SIGINT/SIGTERM, then drains in-flight requests.
///
/// `cleanup` starts once the signal arrives and is abandoned after
/// `shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        if shutdown_rx.recv().await.is_err() {
            return;
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let app = trim_trailing_slash(router);
    let serve_result = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}
