//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use mongodb::Client;

pub fn router(client: Client) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(client)
}

/// 200 when MongoDB answers a ping, 503 otherwise
async fn readiness_check(State(client): State<Client>) -> impl IntoResponse {
    let mongodb: HealthCheckFuture<'_> = Box::pin(async {
        let status = database::mongodb::check_health_detailed(&client).await;
        if status.healthy {
            Ok(())
        } else {
            Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
        }
    });

    run_health_checks(vec![("mongodb", mongodb)]).await
}
