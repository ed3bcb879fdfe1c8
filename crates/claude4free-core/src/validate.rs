//! Input validation: raw form fields → normalized request envelope.

use claude4free_types::{ChatRequest, FunctionKind, ImageAttachment};

use crate::registry::ModelRegistry;

pub const MAX_MESSAGE_CHARS: usize = 10_000;
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub const DEFAULT_TTS_LANGUAGE: &str = "zh-TW";
pub const DEFAULT_IMG_SIZE: &str = "1024x1024";

/// Raw fields as they arrive from the multipart or JSON payload, before
/// any trimming, defaulting, or checks.
#[derive(Debug, Default)]
pub struct RawSubmission {
    pub message: Option<String>,
    pub function: Option<String>,
    pub model: Option<String>,
    pub tts_language: Option<String>,
    pub img_size: Option<String>,
    pub img_style: Option<String>,
    pub image: Option<ImageAttachment>,
}

/// Validate and normalize one submission.
///
/// Rules are evaluated independently, not short-circuited, so the caller
/// receives every violation in one pass. The first entry of the error list
/// becomes the primary `error` field of the 400 response.
pub fn validate(raw: RawSubmission, registry: &ModelRegistry) -> Result<ChatRequest, Vec<String>> {
    let mut errors = Vec::new();

    let message = raw.message.as_deref().unwrap_or("").trim().to_string();

    let parsed_function = match raw.function.as_deref() {
        None | Some("") => Ok(FunctionKind::default()),
        Some(name) => name.parse::<FunctionKind>(),
    };

    // An attached image stands in for the message on the recognition path.
    let has_image = raw.image.is_some();
    let message_exempt = matches!(parsed_function, Ok(FunctionKind::ImageRecognition)) && has_image;
    if message.is_empty() && !message_exempt {
        errors.push("Message content is required".to_string());
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        errors.push(format!(
            "Message too long: the limit is {MAX_MESSAGE_CHARS} characters"
        ));
    }

    let function = match parsed_function {
        Ok(kind) => Some(kind),
        Err(err) => {
            errors.push(err.to_string());
            None
        }
    };

    let model = raw.model.filter(|id| !id.is_empty());

    if function == Some(FunctionKind::Chat) {
        match model.as_deref() {
            None => errors.push("No AI model selected".to_string()),
            Some(id) if registry.resolve(id).is_none() => {
                errors.push(format!("Unsupported model: {id}"));
            }
            Some(_) => {}
        }
    }

    if function == Some(FunctionKind::ImageRecognition) {
        if !has_image {
            errors.push("Image recognition requires an uploaded image".to_string());
        }
        // Recognition does not require a model, but a supplied one must
        // still resolve; the handler decides the vision variant itself.
        if let Some(id) = model.as_deref() {
            if registry.resolve(id).is_none() {
                errors.push(format!("Unsupported model: {id}"));
            }
        }
    }

    if let Some(image) = raw.image.as_ref() {
        if image.len() > MAX_IMAGE_BYTES {
            errors.push("Image file too large: the limit is 10 MiB".to_string());
        }
        if !image.mime_type.starts_with("image/") {
            errors.push("Uploaded file is not an image".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ChatRequest {
        message,
        // a parse failure pushed an error above, so None cannot reach here
        function: function.unwrap_or_default(),
        model,
        tts_language: raw
            .tts_language
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_TTS_LANGUAGE.to_string()),
        img_size: raw
            .img_size
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_IMG_SIZE.to_string()),
        img_style: raw.img_style.unwrap_or_default(),
        image: raw.image,
    })
}
