//! Plain chat completion.

use tracing::warn;

use claude4free_types::protocol::{ChatCompletionRequest, ChatMessage, MessageContent};
use claude4free_types::{ChatRequest, ChatResponse, FunctionKind};

use crate::fallback;
use crate::registry::ModelRegistry;
use crate::upstream::{self, AiGateway};

pub async fn handle_chat(
    request: &ChatRequest,
    registry: &ModelRegistry,
    gateway: &dyn AiGateway,
) -> ChatResponse {
    let model_id = request.model.as_deref().unwrap_or_default();

    // Validation guarantees resolution on this path; degrade rather than
    // panic if that invariant ever breaks.
    let Some(route) = registry.resolve(model_id) else {
        warn!("chat dispatched with unresolved model {model_id}");
        return fallback::mock_response(FunctionKind::Chat, &request.message, model_id);
    };

    let upstream_request = ChatCompletionRequest {
        driver: route.driver.clone(),
        model: route.model.clone(),
        messages: vec![ChatMessage::user(MessageContent::Text(
            request.message.clone(),
        ))],
    };

    match gateway.chat(upstream_request).await {
        Ok(payload) => ChatResponse::text_only(upstream::message_text(&payload)),
        Err(err) => {
            warn!("chat call failed for model {model_id}: {err}");
            fallback::mock_response(FunctionKind::Chat, &request.message, model_id)
        }
    }
}
