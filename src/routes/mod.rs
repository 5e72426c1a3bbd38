//! HTTP route handlers.
//!
//! Two routes: the health check at `/` and the message stream at
//! `/stream_message`. The streaming route carries its fixed response headers
//! (no caching, persistent connection, permissive CORS) as route-scoped
//! header layers.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod stream;

use axum::{middleware, routing::get, Router};
use http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL,
    CONNECTION,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{
    STREAM_ALLOW_HEADERS, STREAM_ALLOW_ORIGIN, STREAM_CACHE_CONTROL, STREAM_CONNECTION,
    STREAM_PATH,
};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and the streaming headers.
pub fn create_router(state: AppState) -> Router {
    // Health check - no special headers, always fresh
    let health_routes = Router::new().route("/", get(health::health));

    // Message stream - SSE responses must not be cached, stay open, and
    // accept any cross-origin caller
    let stream_routes = Router::new()
        .route(STREAM_PATH, get(stream::stream))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(STREAM_CACHE_CONTROL),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            CONNECTION,
            HeaderValue::from_static(STREAM_CONNECTION),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(STREAM_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(STREAM_ALLOW_HEADERS),
        ));

    Router::new()
        .merge(health_routes)
        .merge(stream_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
