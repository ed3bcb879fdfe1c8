//! Canned substitute replies for upstream outages.
//!
//! When the provider is unreachable or returns garbage, the caller still
//! gets a 200 with a visibly-labeled placeholder instead of an error page.
//! The front end renders these like any other reply.

use chrono::Local;
use claude4free_types::{ChatResponse, FunctionKind, ResponseMode};

/// Deterministic placeholder envelope for one failed function call.
///
/// Embeds the function kind, the original message, the model id, and a
/// timestamp so the degradation is obvious in the UI and in logs.
pub fn mock_response(function: FunctionKind, message: &str, model: &str) -> ChatResponse {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let text = match function {
        FunctionKind::Chat => format!(
            "[Fallback mode] You asked the {model} model: \"{message}\"\n\n\
             The live provider could not be reached, so this is a canned \
             reply. Your request will be answered normally once the \
             upstream service recovers.\n\nGenerated at: {timestamp}"
        ),
        FunctionKind::ImageRecognition => format!(
            "[Fallback mode] Image recognition\n\n\
             Your question: \"{message}\"\nRequested model: {model}\n\n\
             The uploaded image will be analyzed once the upstream service \
             is reachable again.\n\nGenerated at: {timestamp}"
        ),
        FunctionKind::TextToSpeech => format!(
            "[Fallback mode] Speech synthesis via {model} for: \"{message}\"\n\n\
             An audio file will be generated once the upstream service is \
             reachable again.\n\nGenerated at: {timestamp}"
        ),
        FunctionKind::TextToImage => format!(
            "[Fallback mode] Image generation via {model} for: \"{message}\"\n\n\
             An image will be generated once the upstream service is \
             reachable again.\n\nGenerated at: {timestamp}"
        ),
    };

    ChatResponse {
        text,
        success: true,
        mode: Some(ResponseMode::Fallback),
        audio_url: None,
        image_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_labeled_and_successful() {
        let envelope = mock_response(FunctionKind::Chat, "你好", "gpt-4o");
        assert!(envelope.success);
        assert_eq!(envelope.mode, Some(ResponseMode::Fallback));
        assert!(envelope.audio_url.is_none());
        assert!(envelope.image_url.is_none());
    }

    #[test]
    fn fallback_embeds_message_and_model() {
        for kind in FunctionKind::ALL {
            let envelope = mock_response(kind, "你好", "gpt-4o");
            assert!(envelope.text.contains("你好"), "missing message for {kind}");
            assert!(envelope.text.contains("gpt-4o"), "missing model for {kind}");
            assert!(envelope.text.contains("[Fallback mode]"));
        }
    }
}
