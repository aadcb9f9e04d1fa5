use axum::http::{HeaderName, HeaderValue, Method, header};
use core_config::ConfigError;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::correlation::CORRELATION_ID_HEADER;
use crate::auth::AUTH_TOKEN_HEADER;

/// CORS for browser clients of the API.
///
/// Exposes `x-auth-token` and `X-Correlation-ID` so scripts can read the
/// issued token and the request id.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    let auth_header = HeaderName::from_static(AUTH_TOKEN_HEADER);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            auth_header.clone(),
            CORRELATION_ID_HEADER,
        ])
        .expose_headers([auth_header, CORRELATION_ID_HEADER])
        .max_age(Duration::from_secs(3600))
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated).
///
/// Returns `Ok(None)` when the variable is unset or blank.
pub fn cors_layer_from_env() -> Result<Option<CorsLayer>, ConfigError> {
    let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        return Ok(None);
    };

    let origins = parse_origins(&raw)?;
    if origins.is_empty() {
        return Ok(None);
    }

    tracing::info!(origins = %raw, "CORS enabled");
    Ok(Some(create_cors_layer(origins)))
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: format!("{s}: {e}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:3000, https://shop.example.com ,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://shop.example.com");
    }

    #[test]
    fn test_parse_origins_rejects_invalid_value() {
        let err = parse_origins("http://ok.example.com,bad\nvalue").unwrap_err();
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
    }

    #[test]
    fn test_cors_disabled_when_unset() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_layer_from_env().unwrap().is_none());
        });
    }

    #[test]
    fn test_cors_enabled_when_set() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000"), || {
            assert!(cors_layer_from_env().unwrap().is_some());
        });
    }
}
