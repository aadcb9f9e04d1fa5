//! OpenAPI documentation configuration

use axum_helpers::AUTH_TOKEN_HEADER;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Folds the domain documents into the combined one
struct DomainDocs;

impl Modify for DomainDocs {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(domain_products::ApiDoc::openapi());
        openapi.merge(domain_users::ApiDoc::openapi());
    }
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            AUTH_TOKEN_HEADER,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                AUTH_TOKEN_HEADER,
                "Token returned by POST /users or POST /auth.",
            ))),
        );
    }
}

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Electronics API",
        version = "0.1.0",
        description = "Product catalog with token-gated writes, plus user registration and authentication",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    modifiers(&DomainDocs, &SecurityAddon)
)]
pub struct ApiDoc;
