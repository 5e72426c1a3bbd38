//! Streaming endpoint handler.
//!
//! Each accepted connection gets its own independent emitter stream seeded
//! from OS entropy. The response body never completes on its own; when the
//! client disconnects, hyper drops the body stream and the emitter stops at
//! its next suspension point. Disconnection is normal termination, not an
//! error.

use std::convert::Infallible;

use axum::{
    body::Body,
    extract::State,
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use http::header::CONTENT_TYPE;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SSE_CONTENT_TYPE;
use crate::emitter::message_stream;
use crate::state::AppState;

/// `GET /stream_message` handler: open an unbounded SSE response.
pub async fn stream(State(state): State<AppState>) -> Response {
    tracing::debug!(emoji = state.config.stream.emoji, "opening message stream");

    let rng = StdRng::from_os_rng();
    let frames = message_stream(rng, state.config.stream.emoji)
        .map(Ok::<_, Infallible>);

    (
        [(CONTENT_TYPE, SSE_CONTENT_TYPE)],
        Body::from_stream(frames),
    )
        .into_response()
}
