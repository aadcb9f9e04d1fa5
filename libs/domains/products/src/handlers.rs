//! HTTP handlers for the products API

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, Query, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    AppJson, TokenAuth,
    errors::responses::{
        BadRequestValidationResponse, ForbiddenResponse, InternalServerErrorResponse,
        InvalidTokenResponse, PayloadTooLargeResponse, UnprocessableEntityResponse,
    },
    require_admin, require_token,
};
use database::mongodb::DocumentStore;
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductDraft, ProductResponse};
use crate::service::ProductService;

/// Request body cap for create and update
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_products,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductDraft, ProductResponse),
        responses(
            BadRequestValidationResponse,
            UnprocessableEntityResponse,
            PayloadTooLargeResponse,
            ForbiddenResponse,
            InvalidTokenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Products router.
///
/// Reads are public, create and update need a token, delete needs an admin
/// token.
pub fn router<S>(service: ProductService<S>, auth: TokenAuth) -> Router
where
    S: DocumentStore<Product> + 'static,
{
    let shared_service = Arc::new(service);

    let public = Router::new()
        .route("/products", get(list_products::<S>))
        .route("/products/{id}", get(get_product::<S>));

    let authenticated = Router::new()
        .route("/products", post(create_products::<S>))
        .route("/products/{id}", put(update_product::<S>))
        .route_layer(from_fn_with_state(auth.clone(), require_token));

    let admin = Router::new()
        .route("/products/{id}", delete(delete_product::<S>))
        .route_layer(from_fn_with_state(auth, require_admin));

    public
        .merge(authenticated)
        .merge(admin)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(shared_service)
}

/// List products, filtered by equality on any query parameter
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(
        ("currency" = Option<String>, Query, description = "Exact currency code"),
        ("vendor" = Option<String>, Query, description = "Exact vendor name"),
        ("_id" = Option<String>, Query, description = "Product id as 24 hex digits")
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: DocumentStore<Product>>(
    State(service): State<Arc<ProductService<S>>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ProductResult<Json<Vec<ProductResponse>>> {
    let products = service.list_products(&params).await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id as 24 hex digits")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: DocumentStore<Product>>(
    State(service): State<Arc<ProductService<S>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product.into()))
}

/// Create a batch of products, returning their ids in input order
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = Vec<ProductDraft>,
    security(("x-auth-token" = [])),
    responses(
        (status = 201, description = "Products created", body = Vec<String>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InvalidTokenResponse)
    )
)]
async fn create_products<S: DocumentStore<Product>>(
    State(service): State<Arc<ProductService<S>>>,
    AppJson(drafts): AppJson<Vec<ProductDraft>>,
) -> ProductResult<impl IntoResponse> {
    let ids = service.create_products(drafts).await?;
    let ids: Vec<String> = ids.iter().map(|id| id.to_hex()).collect();
    Ok((StatusCode::CREATED, Json(ids)))
}

/// Overlay the body onto a stored product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id as 24 hex digits")
    ),
    request_body = ProductDraft,
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Merged product", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InvalidTokenResponse)
    )
)]
async fn update_product<S: DocumentStore<Product>>(
    State(service): State<Arc<ProductService<S>>>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<Value>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.update_product(&id, patch).await?;
    Ok(Json(product.into()))
}

/// Delete a product, returning the number of deleted products
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id as 24 hex digits")
    ),
    security(("x-auth-token" = [])),
    responses(
        (status = 200, description = "Deleted count", body = u64),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InvalidTokenResponse)
    )
)]
async fn delete_product<S: DocumentStore<Product>>(
    State(service): State<Arc<ProductService<S>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<u64>> {
    let deleted = service.delete_product(&id).await?;
    Ok(Json(deleted))
}
