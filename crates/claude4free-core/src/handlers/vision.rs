//! Image recognition through a vision-capable chat call.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::warn;

use claude4free_types::protocol::{
    ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl, MessageContent,
};
use claude4free_types::{ChatRequest, ChatResponse, FunctionKind};

use crate::fallback;
use crate::upstream::{self, AiGateway};

// Recognition always runs on a vision-capable model, whatever the UI has
// selected for chat.
const VISION_DRIVER: &str = "openai-vision";
const VISION_MODEL: &str = "gpt-4o";

const DEFAULT_PROMPT: &str = "Describe this image.";

pub async fn handle_image_recognition(
    request: &ChatRequest,
    gateway: &dyn AiGateway,
) -> ChatResponse {
    let reported_model = request.model.as_deref().unwrap_or(VISION_MODEL);

    // Validation guarantees an attachment; degrade rather than panic.
    let Some(image) = request.image.as_ref() else {
        warn!("image recognition dispatched without an attachment");
        return fallback::mock_response(
            FunctionKind::ImageRecognition,
            &request.message,
            reported_model,
        );
    };

    let prompt = if request.message.is_empty() {
        DEFAULT_PROMPT
    } else {
        request.message.as_str()
    };

    let data_uri = format!(
        "data:{};base64,{}",
        image.mime_type,
        BASE64.encode(&image.bytes)
    );

    let upstream_request = ChatCompletionRequest {
        driver: VISION_DRIVER.to_string(),
        model: VISION_MODEL.to_string(),
        messages: vec![ChatMessage::user(MessageContent::Parts(vec![
            ContentPart::Text {
                text: prompt.to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl { url: data_uri },
            },
        ]))],
    };

    match gateway.vision(upstream_request).await {
        Ok(payload) => ChatResponse::text_only(upstream::message_text(&payload)),
        Err(err) => {
            warn!(
                "vision call failed ({} bytes, {}): {err}",
                image.len(),
                image.mime_type
            );
            fallback::mock_response(
                FunctionKind::ImageRecognition,
                &request.message,
                reported_model,
            )
        }
    }
}
