use axum_helpers::{TokenAuth, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{ProductService, product_store};
use domain_users::{PasswordHasher, UserService, user_store};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let state = AppState {
        token_auth: TokenAuth::new(&config.token),
        config,
        mongo_client,
        db,
    };

    let hasher = PasswordHasher::new(&state.config.password)?;
    let users = UserService::new(
        user_store(&state.db, &state.config.collections.users),
        hasher,
        state.token_auth.clone(),
    );
    users.ensure_indexes().await?;
    info!(
        collection = %state.config.collections.users,
        "Unique username index in place"
    );

    let products = ProductService::new(product_store(
        &state.db,
        &state.config.collections.products,
    ));

    let api_routes = api::routes(products, users, state.token_auth.clone());
    let probes = health_router(state.config.app)
        .merge(api::health::router(state.mongo_client.clone()));
    let app = api::app(api_routes, probes)?;

    info!("Starting Electronics API with graceful shutdown (30s timeout)");

    let server = state.config.server.clone();
    axum_helpers::create_production_app(app, &server, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB connections");
        // The client closes its pool on drop
        drop(state);
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Electronics API shutdown complete");
    Ok(())
}
