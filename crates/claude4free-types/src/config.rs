//! Server configuration.
//!
//! Constructed once at startup from CLI flags and environment variables,
//! then shared read-only behind an `Arc`. No runtime mutation.

use serde::{Deserialize, Serialize};

/// Default base URL of the AI aggregation API.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://api.puter.com";

/// Browser origins trusted for CORS. Any origin containing `localhost` or
/// `127.0.0.1` is additionally allowed at decision time; everything else
/// gets the first entry of this list echoed back instead.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://claude4free.pages.dev",
    "https://claude4free-pages.davis1233798.workers.dev",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

pub fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|origin| (*origin).to_string())
        .collect()
}

/// Immutable server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upstream_base_url: String,
    /// Deployment environment label, reported by `/health`. Error details
    /// are attached to 500 responses only outside `production`.
    pub environment: String,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            upstream_base_url: DEFAULT_UPSTREAM_BASE.to_string(),
            environment: "production".to_string(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl ServerConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
