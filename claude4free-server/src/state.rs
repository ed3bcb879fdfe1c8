//! Shared application state.

use std::sync::Arc;

use claude4free_core::cors::CorsPolicy;
use claude4free_core::registry::ModelRegistry;
use claude4free_core::upstream::{AiGateway, PuterClient};
use claude4free_types::ServerConfig;

/// Request-independent state: configuration, the read-only model table,
/// the CORS policy, and the upstream gateway. Everything is constructed
/// once at startup; nothing is mutated afterwards, so handlers share it
/// without coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub registry: Arc<ModelRegistry>,
    pub cors: Arc<CorsPolicy>,
    pub gateway: Arc<dyn AiGateway>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        // Build the HTTP client up front; TLS setup should not happen
        // inside a request.
        let http = reqwest::Client::builder().build()?;
        let gateway = Arc::new(PuterClient::new(http, config.upstream_base_url.clone()));
        Ok(Self::with_gateway(config, gateway))
    }

    /// Same as [`AppState::new`] but with a caller-supplied gateway; tests
    /// use this to substitute a double for the live provider.
    pub fn with_gateway(config: ServerConfig, gateway: Arc<dyn AiGateway>) -> Self {
        Self {
            cors: Arc::new(CorsPolicy::new(config.allowed_origins.clone())),
            registry: Arc::new(ModelRegistry::new()),
            gateway,
            config: Arc::new(config),
        }
    }
}
