//! The four function handlers.
//!
//! Each handler owns its failure domain completely: an upstream error is
//! caught here and converted into a fallback envelope, never propagated.
//! From the dispatcher's perspective every handled request succeeds.

mod chat;
mod image;
mod speech;
mod vision;


pub use chat::handle_chat;
pub use image::handle_text_to_image;
pub use speech::handle_text_to_speech;
pub use vision::handle_image_recognition;

use claude4free_types::{ChatRequest, ChatResponse, FunctionKind};

use crate::registry::ModelRegistry;
use crate::upstream::AiGateway;

/// Route a validated request to its function handler.
pub async fn dispatch(
    request: &ChatRequest,
    registry: &ModelRegistry,
    gateway: &dyn AiGateway,
) -> ChatResponse {
    match request.function {
        FunctionKind::Chat => chat::handle_chat(request, registry, gateway).await,
        FunctionKind::ImageRecognition => vision::handle_image_recognition(request, gateway).await,
        FunctionKind::TextToSpeech => speech::handle_text_to_speech(request, gateway).await,
        FunctionKind::TextToImage => image::handle_text_to_image(request, gateway).await,
    }
}
