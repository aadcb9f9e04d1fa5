//! API routes module

pub mod health;

use axum::{Router, middleware};
use axum_helpers::{TokenAuth, correlation_id, create_router};
use core_config::ConfigError;
use database::mongodb::DocumentStore;
use domain_products::{Product, ProductService};
use domain_users::{User, UserService};

use crate::openapi::ApiDoc;

/// Product and user routes
pub fn routes<P, U>(
    products: ProductService<P>,
    users: UserService<U>,
    token_auth: TokenAuth,
) -> Router
where
    P: DocumentStore<Product> + 'static,
    U: DocumentStore<User> + 'static,
{
    Router::new()
        .merge(domain_products::handlers::router(products, token_auth))
        .merge(domain_users::handlers::router(users))
}

/// Full application: documented API routes and `probes` behind the shared
/// middleware stack, with correlation ids on every response.
pub fn app(api_routes: Router, probes: Router) -> Result<Router, ConfigError> {
    let router = create_router::<ApiDoc>(api_routes.merge(probes))?
        .layer(middleware::from_fn(correlation_id));
    Ok(router)
}
