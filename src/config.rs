//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines the fixed
//! protocol constants: emission delay bounds, event id range, emoji insertion
//! bounds, and the response header values for the streaming endpoint.
//! `AppConfig` is the root configuration struct containing all settings.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Emission Constants
// =============================================================================

/// Minimum delay between consecutive emissions on one connection, in seconds
pub const EMIT_DELAY_MIN_SECS: f64 = 1.0;

/// Maximum delay between consecutive emissions on one connection, in seconds
pub const EMIT_DELAY_MAX_SECS: f64 = 3.0;

/// Lowest event id (inclusive)
pub const EVENT_ID_MIN: u32 = 1000;

/// Highest event id (inclusive)
pub const EVENT_ID_MAX: u32 = 9999;

/// Minimum number of emoji inserted per decorated message
pub const EMOJI_COUNT_MIN: usize = 1;

/// Maximum number of emoji inserted per decorated message
pub const EMOJI_COUNT_MAX: usize = 3;

/// Timestamp format for emitted events (day/month/two-digit year)
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y";

// =============================================================================
// HTTP Response Headers (streaming endpoint)
// =============================================================================
// SSE responses must never be cached or buffered by intermediaries, and the
// stream is consumed cross-origin by browser EventSource clients.

pub const STREAM_CACHE_CONTROL: &str = "no-cache";
pub const STREAM_CONNECTION: &str = "keep-alive";
pub const STREAM_ALLOW_ORIGIN: &str = "*";
pub const STREAM_ALLOW_HEADERS: &str = "*";

/// Content type for Server-Sent Events responses
pub const SSE_CONTENT_TYPE: &str = "text/event-stream";

// =============================================================================
// Fixed Response Strings
// =============================================================================

/// Status message returned by the health check endpoint
pub const HEALTH_MESSAGE: &str = "Random Message Streaming Server is running!";

/// Path of the streaming endpoint, advertised by the health check
pub const STREAM_PATH: &str = "/stream_message";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "chatter=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Message stream settings
    #[serde(default)]
    pub stream: StreamConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        8000
    }
}

/// Message stream settings
#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// Whether emitted messages are decorated with random emoji
    #[serde(default = "StreamConfig::default_emoji")]
    pub emoji: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            emoji: Self::default_emoji(),
        }
    }
}

impl StreamConfig {
    fn default_emoji() -> bool {
        true
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to built-in defaults when
    /// the file does not exist. Parse errors still fail startup.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
