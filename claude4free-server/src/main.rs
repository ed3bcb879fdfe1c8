//! Claude4Free Server
//!
//! A thin HTTP proxy that forwards chat, image recognition, speech, and
//! image generation requests from the browser front end to an AI
//! aggregation API:
//! - Validates and normalizes the multipart/JSON payload on /api/chat
//! - Degrades to a labeled fallback reply when the upstream is unreachable
//! - Wraps every response in CORS headers for the allow-listed front ends
//!
//! Access via: http://localhost:8787

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod middleware;
mod router;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::Cli;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = cli.into_config()?;

    info!("🚀 Claude4Free server starting on port {}...", config.port);
    info!("🔗 Upstream API base: {}", config.upstream_base_url);
    info!("🌍 Environment: {}", config.environment);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = AppState::new(config)?;

    info!(
        "✅ Application state initialized ({} models)",
        state.registry.len()
    );

    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Server listening on http://{}", addr);
    info!("🔌 API available at http://{}/api/chat", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
