//! Ordered extraction strategies for loosely-typed upstream payloads.
//!
//! Observed responses disagree on field names between provider revisions.
//! Each accessor tries the known shapes in order and takes the first hit.

use serde_json::Value;

fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    current.as_str().map(str::to_owned)
}

/// Assistant text: `message.content`, then `content`, then `text`. When
/// none match, the payload itself is rendered as the reply rather than
/// losing it.
pub fn message_text(payload: &Value) -> String {
    [&["message", "content"][..], &["content"], &["text"]]
        .iter()
        .find_map(|path| string_at(payload, path))
        .unwrap_or_else(|| payload.to_string())
}

/// Audio reference: `audio_url`, then `url`, then `data`.
pub fn audio_reference(payload: &Value) -> Option<String> {
    ["audio_url", "url", "data"]
        .iter()
        .copied()
        .find_map(|key| string_at(payload, &[key]))
}

/// Image reference: `data[0].url`, then `image_url`, then `url`.
pub fn image_reference(payload: &Value) -> Option<String> {
    payload
        .get("data")
        .and_then(|data| data.get(0))
        .and_then(|entry| entry.get("url"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .or_else(|| {
            ["image_url", "url"]
                .iter()
                .copied()
                .find_map(|key| string_at(payload, &[key]))
        })
}
