use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use rand::{RngExt, distr::Alphanumeric};
use tracing::Instrument;

/// `X-Correlation-ID`
pub const CORRELATION_ID_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

const GENERATED_ID_LEN: usize = 12;

/// Random 12-character alphanumeric id
pub fn generate_correlation_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_ID_LEN)
        .map(char::from)
        .collect()
}

/// Propagates the caller's `X-Correlation-ID` or assigns a fresh one.
///
/// The id is written to the request before the inner service runs and to the
/// response afterwards, and every event of the request is logged inside a span
/// carrying it.
pub async fn correlation_id(mut request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(&CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(generate_correlation_id);

    let header = HeaderValue::from_str(&id).ok();
    if let Some(value) = &header {
        request
            .headers_mut()
            .insert(CORRELATION_ID_HEADER, value.clone());
    }

    let span = tracing::info_span!(
        "request",
        correlation_id = %id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Some(value) = header {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    // Echoes the id seen by the handler so the request side can be checked.
    async fn echo(request: Request) -> String {
        request
            .headers()
            .get(&CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(echo))
            .layer(middleware::from_fn(correlation_id))
    }

    async fn body_string(response: Response) -> String {
        use http_body_util::BodyExt;
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_generated_id_shape() {
        let id = generate_correlation_id();
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, generate_correlation_id());
    }

    #[tokio::test]
    async fn test_incoming_id_is_propagated() {
        let request = Request::builder()
            .uri("/")
            .header("X-Correlation-ID", "abc-123")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-correlation-id"], "abc-123");
        assert_eq!(body_string(response).await, "abc-123");
    }

    #[tokio::test]
    async fn test_missing_id_is_generated_on_both_sides() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();
        let header = response.headers()["x-correlation-id"]
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(header.len(), 12);
        assert_eq!(body_string(response).await, header);
    }
}
