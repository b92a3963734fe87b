//! HTTP route handlers for the API surface.
//!
//! Two static JSON endpoints are exposed: a health check liveness probe and a
//! root welcome message. Unmatched paths fall through to a JSON 404 handler.
//!
//! Cross-origin requests are handled by tower-http's CORS layer, configured
//! from the allow-list in `[cors]`. Because credentials are allowed, methods
//! and headers are mirrored from the request rather than advertised as `*`
//! (wildcards are invalid in credentialed responses).
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod root;

use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use http::HeaderValue;
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::AppConfig;
use crate::middleware::request_id_layer;

/// Fallback handler for unmatched paths.
///
/// Returns the framework-default JSON body for a missing route.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

/// Build the CORS layer from the configured origin allow-list.
///
/// Origins that fail to parse as header values are skipped with a warning
/// rather than aborting startup.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Creates the Axum router with all routes and middleware layers.
pub fn create_router(config: &AppConfig) -> Router {
    // Health check - always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    // Root welcome message
    let root_routes = Router::new().route("/", get(root::root));

    Router::new()
        .merge(root_routes)
        .merge(health_routes)
        .fallback(not_found)
        // CORS layer - echoes allow-listed origins, mirrors methods/headers
        .layer(cors_layer(config))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_returns_404_with_json_detail() {
        let (status, Json(body)) = not_found().await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Not Found" }));
    }

    #[test]
    fn invalid_origin_does_not_panic_router_construction() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins.push("not a header\nvalue".to_string());

        let _router = create_router(&config);
    }
}
