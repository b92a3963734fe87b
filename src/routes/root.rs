//! Root endpoint returning the API welcome message.

use axum::Json;
use serde_json::{json, Value};

/// Root handler.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to Shortbread API" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let Json(body) = root().await;

        assert_eq!(body, json!({ "message": "Welcome to Shortbread API" }));
    }
}
