//! Per-connection message emitter.
//!
//! `message_stream` builds an unbounded lazy stream of SSE frames. Every
//! accepted streaming connection gets its own instance with its own RNG; the
//! stream suspends on a tokio timer between frames, so it never occupies a
//! thread, and dropping it (client disconnect) cancels the pending timer with
//! it.
//!
//! The RNG is passed in rather than drawn from ambient global state so tests
//! can seed it deterministically.

use std::time::Duration;

use chrono::Local;
use futures::stream::Stream;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use crate::config::{
    EMIT_DELAY_MAX_SECS, EMIT_DELAY_MIN_SECS, EVENT_ID_MAX, EVENT_ID_MIN, TIMESTAMP_FORMAT,
};
use crate::messages::{decorate, pick_message};

/// A single emitted event, created fresh per emission and discarded after
/// serialization. The `message` field embeds the `timestamp` as its prefix.
#[derive(Debug, Serialize)]
pub struct StreamEvent {
    pub timestamp: String,
    pub message: String,
    pub id: u32,
}

impl StreamEvent {
    /// Generate the next event: current local date, a random sentence from
    /// the pool, optional emoji decoration, and a random 4-digit id.
    pub fn next<R: Rng>(rng: &mut R, emoji: bool) -> Self {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let text = pick_message(rng);
        let text = if emoji {
            decorate(text, rng)
        } else {
            text.to_string()
        };

        Self {
            message: format!("{timestamp} {text}"),
            id: rng.random_range(EVENT_ID_MIN..=EVENT_ID_MAX),
            timestamp,
        }
    }

    /// Render the event as a Server-Sent-Events frame:
    /// `data: <compact json>\n\n`.
    pub fn to_frame(&self) -> String {
        // Flat string/string/int record, serialization is total.
        let json = serde_json::to_string(self).expect("event serialization cannot fail");
        format!("data: {json}\n\n")
    }
}

/// Build the unbounded frame stream for one connection.
///
/// The first frame is produced immediately; each subsequent frame follows a
/// uniformly random 1-3 second delay. The stream never terminates on its own.
pub fn message_stream(rng: StdRng, emoji: bool) -> impl Stream<Item = String> {
    futures::stream::unfold((rng, false), move |(mut rng, started)| async move {
        if started {
            let delay = rng.random_range(EMIT_DELAY_MIN_SECS..=EMIT_DELAY_MAX_SECS);
            tokio::time::sleep(Duration::from_secs_f64(delay)).await;
        }
        let frame = StreamEvent::next(&mut rng, emoji).to_frame();
        Some((frame, (rng, true)))
    })
}
