//! reqwest-backed [`AiGateway`] implementation.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use claude4free_types::protocol::{ChatCompletionRequest, ImageGenerationRequest, SpeechRequest};

use super::{AiGateway, UpstreamError};

const CHAT_ENDPOINT: &str = "/drivers/chat";
const VISION_ENDPOINT: &str = "/drivers/vision";
const TTS_ENDPOINT: &str = "/drivers/tts";
const IMAGE_ENDPOINT: &str = "/drivers/image-generation";

const CLIENT_AGENT: &str = concat!("Claude4Free-API/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the aggregation provider.
pub struct PuterClient {
    http: Client,
    base_url: String,
}

impl PuterClient {
    /// Accepts a pre-built `reqwest::Client` so TLS initialization happens
    /// outside the async runtime.
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B>(&self, endpoint: &str, body: &B) -> Result<Value, UpstreamError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("calling upstream: {url}");

        let response = self
            .http
            .post(&url)
            .header(USER_AGENT, CLIENT_AGENT)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl AiGateway for PuterClient {
    async fn chat(&self, request: ChatCompletionRequest) -> Result<Value, UpstreamError> {
        self.post_json(CHAT_ENDPOINT, &request).await
    }

    async fn vision(&self, request: ChatCompletionRequest) -> Result<Value, UpstreamError> {
        self.post_json(VISION_ENDPOINT, &request).await
    }

    async fn speech(&self, request: SpeechRequest) -> Result<Value, UpstreamError> {
        self.post_json(TTS_ENDPOINT, &request).await
    }

    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<Value, UpstreamError> {
        self.post_json(IMAGE_ENDPOINT, &request).await
    }
}
