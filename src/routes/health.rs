//! Health check endpoint.
//!
//! Returns a fixed JSON status object listing the available streaming
//! endpoint. No side effects; used as a liveness probe and as endpoint
//! discovery for clients.

use axum::Json;
use serde::Serialize;

use crate::config::{HEALTH_MESSAGE, STREAM_PATH};

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub endpoints: [&'static str; 1],
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE,
        endpoints: [STREAM_PATH],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_body_is_fixed() {
        let Json(body) = health().await;
        assert_eq!(body.message, "Random Message Streaming Server is running!");
        assert_eq!(body.endpoints, ["/stream_message"]);
    }

    #[test]
    fn health_serializes_to_exact_shape() {
        let body = HealthResponse {
            message: HEALTH_MESSAGE,
            endpoints: [STREAM_PATH],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "Random Message Streaming Server is running!",
                "endpoints": ["/stream_message"],
            })
        );
    }
}
