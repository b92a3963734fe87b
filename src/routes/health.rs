//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, systemd, and load balancers to verify
//! the service is alive.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response body.
///
/// A fixed-shape record serialized as JSON in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

impl HealthResponse {
    /// The payload reported while the process can respond to HTTP.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Shortbread API is running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to
/// HTTP, so it never fails and carries no state.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy() {
        let Json(body) = health().await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.message, "Shortbread API is running");
        assert_eq!(body.version, "1.0.0");
    }

    #[test]
    fn health_response_serializes_in_field_order() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();

        assert_eq!(
            json,
            r#"{"status":"healthy","message":"Shortbread API is running","version":"1.0.0"}"#
        );
    }
}
