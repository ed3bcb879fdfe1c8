//! Text-to-speech synthesis.

use tracing::warn;

use claude4free_types::protocol::SpeechRequest;
use claude4free_types::{ChatRequest, ChatResponse, FunctionKind};

use crate::fallback;
use crate::upstream::{self, AiGateway};

const TTS_DRIVER: &str = "openai-tts";
const TTS_MODEL: &str = "tts-1";
const TTS_VOICE: &str = "alloy";
const TTS_FORMAT: &str = "mp3";

pub async fn handle_text_to_speech(request: &ChatRequest, gateway: &dyn AiGateway) -> ChatResponse {
    let upstream_request = SpeechRequest {
        driver: TTS_DRIVER.to_string(),
        model: TTS_MODEL.to_string(),
        voice: TTS_VOICE.to_string(),
        input: request.message.clone(),
        response_format: TTS_FORMAT.to_string(),
    };

    match gateway.speech(upstream_request).await {
        Ok(payload) => ChatResponse {
            text: format!("Generated speech ({})", request.tts_language),
            success: true,
            mode: None,
            audio_url: upstream::audio_reference(&payload),
            image_url: None,
        },
        Err(err) => {
            warn!("speech call failed ({}): {err}", request.tts_language);
            fallback::mock_response(FunctionKind::TextToSpeech, &request.message, TTS_MODEL)
        }
    }
}
