//! Text-to-image generation.

use tracing::warn;

use claude4free_types::protocol::ImageGenerationRequest;
use claude4free_types::{ChatRequest, ChatResponse, FunctionKind};

use crate::fallback;
use crate::upstream::{self, AiGateway};

const IMAGE_DRIVER: &str = "openai-image-generation";
const IMAGE_MODEL: &str = "dall-e-3";
const IMAGE_QUALITY: &str = "standard";

pub async fn handle_text_to_image(request: &ChatRequest, gateway: &dyn AiGateway) -> ChatResponse {
    let prompt = if request.img_style.is_empty() {
        request.message.clone()
    } else {
        format!("{}, {} style", request.message, request.img_style)
    };

    let upstream_request = ImageGenerationRequest {
        driver: IMAGE_DRIVER.to_string(),
        model: IMAGE_MODEL.to_string(),
        prompt,
        size: request.img_size.clone(),
        quality: IMAGE_QUALITY.to_string(),
        n: 1,
    };

    match gateway.generate_image(upstream_request).await {
        Ok(payload) => ChatResponse {
            text: format!("Generated image: {}", request.message),
            success: true,
            mode: None,
            audio_url: None,
            image_url: upstream::image_reference(&payload),
        },
        Err(err) => {
            warn!("image generation failed ({}): {err}", request.img_size);
            fallback::mock_response(FunctionKind::TextToImage, &request.message, IMAGE_MODEL)
        }
    }
}
