//! CORS decisions for browser-facing responses.
//!
//! The policy is pure and stateless: the allow-list is fixed at startup
//! and every response, success or error, carries the same header set. A
//! disallowed origin is not rejected; it receives the first canonical
//! origin instead of its own, which the browser then refuses to match.

pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";
pub const MAX_AGE: &str = "86400";

/// Per-request CORS decision derived from the `Origin` header.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Exact allow-list match, or any origin on a loopback host.
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
            || origin.contains("localhost")
            || origin.contains("127.0.0.1")
    }

    /// The origin to echo in `Access-Control-Allow-Origin`: the requester's
    /// own origin when allowed, otherwise the first canonical entry.
    pub fn resolve_origin<'a>(&'a self, origin: Option<&'a str>) -> &'a str {
        match origin {
            Some(o) if self.is_allowed(o) => o,
            _ => self
                .allowed_origins
                .first()
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }
}
