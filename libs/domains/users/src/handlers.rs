//! HTTP handlers for registration and authentication

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{
    AUTH_TOKEN_HEADER, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, PayloadTooLargeResponse,
        UnauthorizedResponse, UnprocessableEntityResponse,
    },
};
use database::mongodb::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{Credentials, User, UserResponse};
use crate::service::{Session, UserService};

/// Request body cap for registration
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(register, authenticate),
    components(
        schemas(Credentials, UserResponse),
        responses(
            BadRequestValidationResponse,
            UnauthorizedResponse,
            UnprocessableEntityResponse,
            PayloadTooLargeResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "Registration and authentication")
    )
)]
pub struct ApiDoc;

pub fn router<S>(service: UserService<S>) -> Router
where
    S: DocumentStore<User> + 'static,
{
    let shared_service = Arc::new(service);

    let registration = Router::new()
        .route("/users", post(register::<S>))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    Router::new()
        .route("/auth", post(authenticate::<S>))
        .merge(registration)
        .with_state(shared_service)
}

fn session_response(status: StatusCode, session: Session) -> impl IntoResponse {
    (
        status,
        [(AUTH_TOKEN_HEADER, session.token)],
        Json(session.user),
    )
}

/// Register a user and issue their token
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = Credentials,
    responses(
        (status = 201, description = "User registered; token in the x-auth-token header",
            body = UserResponse,
            headers(("x-auth-token" = String, description = "Signed access token"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<S: DocumentStore<User>>(
    State(service): State<Arc<UserService<S>>>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> UserResult<impl IntoResponse> {
    let session = service.register(credentials).await?;
    Ok(session_response(StatusCode::CREATED, session))
}

/// Check credentials and issue a token
#[utoipa::path(
    post,
    path = "/auth",
    tag = "Users",
    request_body = Credentials,
    responses(
        (status = 200, description = "Authenticated; token in the x-auth-token header",
            body = UserResponse,
            headers(("x-auth-token" = String, description = "Signed access token"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn authenticate<S: DocumentStore<User>>(
    State(service): State<Arc<UserService<S>>>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> UserResult<impl IntoResponse> {
    let session = service.authenticate(credentials).await?;
    Ok(session_response(StatusCode::OK, session))
}
