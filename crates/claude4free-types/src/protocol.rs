//! Upstream wire request bodies.
//!
//! Only requests get typed structs. Responses stay loosely-typed JSON: the
//! provider's response schema has shifted between observed revisions, so
//! extraction happens through ordered strategies in the core crate instead
//! of a struct that would reject tomorrow's shape.

use serde::Serialize;

/// One turn of a chat or vision conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn user(content: MessageContent) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

/// Plain text for chat, content parts for vision.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Body for the chat-completion and vision endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub driver: String,
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Body for the speech-synthesis endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub driver: String,
    pub model: String,
    pub voice: String,
    pub input: String,
    pub response_format: String,
}

/// Body for the image-generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub driver: String,
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u32,
}
