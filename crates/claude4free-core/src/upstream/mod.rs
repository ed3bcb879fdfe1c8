//! Pluggable gateway to the AI aggregation provider.
//!
//! The provider's endpoint names and payload schemas have shifted between
//! observed revisions, so the integration is deliberately indirect:
//! handlers call through the [`AiGateway`] trait, and every response is
//! treated as loosely-typed JSON picked apart by the [`extract`]
//! strategies. Tests substitute the trait; nothing downstream depends on
//! the concrete wire shapes.

mod extract;
mod puter;

pub use extract::{audio_reference, image_reference, message_text};
pub use puter::PuterClient;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use claude4free_types::protocol::{ChatCompletionRequest, ImageGenerationRequest, SpeechRequest};

/// Failure modes of one upstream call.
///
/// Handlers convert every variant into a fallback envelope; none of them
/// crosses a handler boundary.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Gateway to the upstream AI provider, one method per function kind.
///
/// Implementations return the raw response payload; callers own the
/// interpretation.
#[async_trait]
pub trait AiGateway: Send + Sync {
    async fn chat(&self, request: ChatCompletionRequest) -> Result<Value, UpstreamError>;

    async fn vision(&self, request: ChatCompletionRequest) -> Result<Value, UpstreamError>;

    async fn speech(&self, request: SpeechRequest) -> Result<Value, UpstreamError>;

    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<Value, UpstreamError>;
}
