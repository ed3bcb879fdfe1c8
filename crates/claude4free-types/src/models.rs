//! Request and response envelopes for the browser-facing API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four operation kinds the proxy supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionKind {
    #[default]
    Chat,
    ImageRecognition,
    TextToSpeech,
    TextToImage,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 4] = [
        FunctionKind::Chat,
        FunctionKind::ImageRecognition,
        FunctionKind::TextToSpeech,
        FunctionKind::TextToImage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FunctionKind::Chat => "chat",
            FunctionKind::ImageRecognition => "image-recognition",
            FunctionKind::TextToSpeech => "text-to-speech",
            FunctionKind::TextToImage => "text-to-image",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a form field names a function outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported function type: {0}")]
pub struct ParseFunctionError(pub String);

impl FromStr for FunctionKind {
    type Err = ParseFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FunctionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseFunctionError(s.to_string()))
    }
}

/// An uploaded image, captured from the multipart payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl ImageAttachment {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Normalized request envelope produced by validation.
///
/// Optional fields have already been defaulted (`tts_language`, `img_size`)
/// and `message` has been trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub function: FunctionKind,
    pub model: Option<String>,
    pub tts_language: String,
    pub img_size: String,
    pub img_style: String,
    pub image: Option<ImageAttachment>,
}

/// Marker distinguishing live replies from canned substitutes. Live
/// replies omit the field entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    Normal,
    Fallback,
}

/// Uniform envelope returned by every function handler, regardless of
/// which code path produced it. Created fresh per request; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ResponseMode>,
    #[serde(rename = "audioUrl", skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ChatResponse {
    /// A successful text-only reply with no attachments and no mode marker.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
            mode: None,
            audio_url: None,
            image_url: None,
        }
    }
}
