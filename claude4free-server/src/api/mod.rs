//! HTTP API handlers.

pub mod chat;
pub mod docs;
pub mod health;

#[cfg(test)]
mod cors_tests;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

/// ISO-8601 timestamp with millisecond precision, as the front end expects.
pub(crate) fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 404 for anything outside the route table, listing what does exist.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "available_endpoints": ["/health", "/api/chat", "/"],
            "timestamp": iso_timestamp(),
        })),
    )
}
