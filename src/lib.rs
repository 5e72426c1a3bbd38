//! Chatter: a random message streaming server.
//!
//! Serves a health check at `/` and an unbounded Server-Sent-Events stream
//! of randomly generated, timestamped (and optionally emoji-decorated)
//! messages at `/stream_message`. Each connection drives its own independent
//! emitter; the static message and emoji pools are shared read-only.

pub mod config;
pub mod emitter;
pub mod messages;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
