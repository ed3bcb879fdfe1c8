//! Test helpers for claude4free-server unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use claude4free_core::upstream::{AiGateway, UpstreamError};
use claude4free_types::protocol::{ChatCompletionRequest, ImageGenerationRequest, SpeechRequest};
use claude4free_types::ServerConfig;

use crate::state::AppState;

/// Gateway double: replies with one fixed payload, or fails every call
/// when built with [`StubGateway::unreachable`].
pub struct StubGateway {
    payload: Option<Value>,
}

impl StubGateway {
    pub fn replying(payload: Value) -> Self {
        Self {
            payload: Some(payload),
        }
    }

    pub fn unreachable() -> Self {
        Self { payload: None }
    }

    fn respond(&self) -> Result<Value, UpstreamError> {
        match &self.payload {
            Some(payload) => Ok(payload.clone()),
            None => Err(UpstreamError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            }),
        }
    }
}

#[async_trait]
impl AiGateway for StubGateway {
    async fn chat(&self, _request: ChatCompletionRequest) -> Result<Value, UpstreamError> {
        self.respond()
    }

    async fn vision(&self, _request: ChatCompletionRequest) -> Result<Value, UpstreamError> {
        self.respond()
    }

    async fn speech(&self, _request: SpeechRequest) -> Result<Value, UpstreamError> {
        self.respond()
    }

    async fn generate_image(
        &self,
        _request: ImageGenerationRequest,
    ) -> Result<Value, UpstreamError> {
        self.respond()
    }
}

/// Minimal `AppState` backed by a stub gateway and the default config.
pub fn test_app_state(gateway: StubGateway) -> AppState {
    AppState::with_gateway(ServerConfig::default(), Arc::new(gateway))
}

/// Full router wired to a stub gateway, for `axum_test::TestServer`.
pub fn test_router(gateway: StubGateway) -> axum::Router {
    crate::router::build_router(test_app_state(gateway))
}
