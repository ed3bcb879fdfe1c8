use clap::Parser;

use claude4free_types::config::{default_allowed_origins, ServerConfig, DEFAULT_UPSTREAM_BASE};

#[derive(Parser)]
#[command(
    name = "claude4free",
    about = "Claude4Free - AI function proxy for the browser front end",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[arg(short, long, env = "CLAUDE4FREE_PORT", default_value = "8787")]
    pub port: u16,

    #[arg(long, env = "CLAUDE4FREE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Base URL of the AI aggregation API
    #[arg(long, env = "PUTER_API_BASE", default_value = DEFAULT_UPSTREAM_BASE)]
    pub upstream_url: String,

    /// Deployment environment label; anything but "production" attaches
    /// error details to 500 responses
    #[arg(long, env = "ENVIRONMENT", default_value = "production")]
    pub environment: String,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Validate flags into the immutable server configuration.
    pub fn into_config(self) -> anyhow::Result<ServerConfig> {
        let upstream = self.upstream_url.trim().trim_end_matches('/').to_string();
        if upstream.is_empty() || url::Url::parse(&upstream).is_err() {
            anyhow::bail!("--upstream-url is not a valid URL: {:?}", self.upstream_url);
        }

        Ok(ServerConfig {
            host: self.host,
            port: self.port,
            upstream_base_url: upstream,
            environment: self.environment,
            allowed_origins: default_allowed_origins(),
        })
    }
}
