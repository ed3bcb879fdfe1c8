//! Route table and middleware stack.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Body cap: the 10 MiB image limit plus multipart framing overhead.
pub(crate) const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    // CORS sits innermost so the 404 fallback and error responses are
    // wrapped too; tracing stays outermost to see every request.
    Router::new()
        .route("/", get(api::docs::index_page))
        .route("/health", get(api::health::health_check))
        .route("/healthz", get(api::health::health_check))
        .route("/api/chat", post(api::chat::handle_chat_request))
        .fallback(api::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            cors_middleware,
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
