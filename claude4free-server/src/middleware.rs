//! CORS wrapping for every outgoing response.
//!
//! `tower_http`'s `CorsLayer` cannot express the reflect-or-default origin
//! rule the front ends rely on, so this is a hand-rolled middleware in the
//! same spot of the stack. Preflight requests are answered here directly
//! and never reach the router.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use claude4free_core::cors;

use crate::state::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors(&state, origin.as_deref(), &mut response);
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors(&state, origin.as_deref(), &mut response);
    response
}

fn apply_cors(state: &AppState, origin: Option<&str>, response: &mut Response) {
    let resolved = state.cors.resolve_origin(origin).to_string();
    let headers = response.headers_mut();

    if let Ok(value) = HeaderValue::from_str(&resolved) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(cors::ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(cors::ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(cors::MAX_AGE),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}
