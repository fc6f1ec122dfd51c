//! CORS middleware configuration.

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Create a CORS layer from configuration.
///
/// With no (valid) origins configured any origin may call the API, without
/// credentials. Otherwise only the listed origins are allowed.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let parsed_origins: Vec<HeaderValue> =
        origins.iter().filter_map(|o| o.parse().ok()).collect();

    if parsed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE, ACCEPT])
            .allow_credentials(true)
            .allow_origin(parsed_origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use tower::ServiceExt;

    async fn preflight(layer: CorsLayer, origin: &str) -> Option<String> {
        let app = Router::new()
            .route("/auth/login", post(|| async { "ok" }))
            .layer(layer);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/auth/login")
                    .header("origin", origin)
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_cors_any_origin_when_unconfigured() {
        let allowed = preflight(create_cors_layer(&[]), "http://10.0.0.5:8081").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_cors_configured_origins() {
        let origins = vec!["http://localhost:8081".to_string()];

        let allowed = preflight(create_cors_layer(&origins), "http://localhost:8081").await;
        assert_eq!(allowed.as_deref(), Some("http://localhost:8081"));

        let denied = preflight(create_cors_layer(&origins), "http://evil.example").await;
        assert!(denied.is_none());
    }

    #[tokio::test]
    async fn test_cors_invalid_origins_fall_back_to_any() {
        let origins = vec!["not a header value\n".to_string()];
        let allowed = preflight(create_cors_layer(&origins), "http://localhost:3000").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }
}
