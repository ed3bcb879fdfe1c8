//! The main /api/chat endpoint.
//!
//! Parses the multipart (preferred) or JSON (alternate) payload, validates
//! it, and dispatches to the function handlers. Validation failures are
//! 400 with the full error list; a payload that cannot be parsed at all is
//! an internal 500. Handled outcomes, fallback included, are always 200.

use axum::{
    extract::{multipart::Field, FromRequest, Multipart, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use claude4free_core::handlers;
use claude4free_core::validate::{self, RawSubmission};
use claude4free_types::{ChatResponse, FunctionKind, ImageAttachment};

use crate::router::MAX_BODY_BYTES;
use crate::state::AppState;

use super::iso_timestamp;

/// Envelope as serialized to the caller: handler output plus the request
/// echo fields.
#[derive(Serialize)]
struct ApiReply {
    #[serde(flatten)]
    envelope: ChatResponse,
    timestamp: String,
    function: FunctionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

#[derive(Serialize)]
struct ValidationReply {
    error: String,
    errors: Vec<String>,
    timestamp: String,
}

pub async fn handle_chat_request(State(state): State<AppState>, request: Request) -> Response {
    let raw = match parse_payload(request).await {
        Ok(raw) => raw,
        Err(detail) => return internal_error(&state, detail),
    };

    let validated = match validate::validate(raw, &state.registry) {
        Ok(request) => request,
        Err(errors) => {
            info!("validation failed: {errors:?}");
            let error = errors.first().cloned().unwrap_or_default();
            return (
                StatusCode::BAD_REQUEST,
                Json(ValidationReply {
                    error,
                    errors,
                    timestamp: iso_timestamp(),
                }),
            )
                .into_response();
        }
    };

    info!(
        function = %validated.function,
        model = validated.model.as_deref().unwrap_or("-"),
        message_chars = validated.message.chars().count(),
        has_image = validated.image.is_some(),
        "dispatching request"
    );

    let envelope =
        handlers::dispatch(&validated, &state.registry, state.gateway.as_ref()).await;

    Json(ApiReply {
        envelope,
        timestamp: iso_timestamp(),
        function: validated.function,
        model: validated.model,
    })
    .into_response()
}

/// Internal failures surface as a generic 500; details are attached only
/// outside production.
fn internal_error(state: &AppState, detail: String) -> Response {
    error!("payload handling failed: {detail}");

    let mut body = serde_json::json!({
        "error": "Internal server error",
        "timestamp": iso_timestamp(),
        "type": "server_error",
    });
    if !state.config.is_production() {
        body["details"] = Value::String(detail);
    }

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

async fn parse_payload(request: Request) -> Result<RawSubmission, String> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|err| format!("multipart parse failed: {err}"))?;
        parse_multipart(multipart).await
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|err| format!("failed to read request body: {err}"))?;
        parse_json(&bytes)
    }
}

async fn parse_multipart(mut multipart: Multipart) -> Result<RawSubmission, String> {
    let mut raw = RawSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| format!("multipart parse failed: {err}"))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| format!("failed to read uploaded file: {err}"))?
                    .to_vec();
                raw.image = Some(ImageAttachment {
                    bytes,
                    mime_type,
                    file_name,
                });
            }
            "message" => raw.message = Some(text(field).await?),
            "function" => raw.function = Some(text(field).await?),
            "model" => raw.model = Some(text(field).await?),
            "tts-language" => raw.tts_language = Some(text(field).await?),
            "img-size" => raw.img_size = Some(text(field).await?),
            "img-style" => raw.img_style = Some(text(field).await?),
            _ => {
                tracing::trace!("ignoring unknown multipart field: {name}");
            }
        }
    }

    Ok(raw)
}

async fn text(field: Field<'_>) -> Result<String, String> {
    field
        .text()
        .await
        .map_err(|err| format!("failed to read form field: {err}"))
}

/// JSON alternate encoding: same keys as the multipart form, no file upload.
fn parse_json(bytes: &[u8]) -> Result<RawSubmission, String> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| format!("JSON parse failed: {err}"))?;

    let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);

    Ok(RawSubmission {
        message: field("message"),
        function: field("function"),
        model: field("model"),
        tts_language: field("tts-language"),
        img_size: field("img-size"),
        img_style: field("img-style"),
        image: None,
    })
}
