use axum::http::{header, HeaderName, HeaderValue, Method, StatusCode};
use axum_test::TestServer;

use crate::test_helpers::{test_router, StubGateway};

const CANONICAL_ORIGIN: &str = "https://claude4free.pages.dev";

fn server() -> TestServer {
    TestServer::new(test_router(StubGateway::unreachable()))
        .expect("failed to build test server")
}

fn origin(value: &str) -> (HeaderName, HeaderValue) {
    (
        header::ORIGIN,
        HeaderValue::from_str(value).expect("valid origin"),
    )
}

#[tokio::test]
async fn preflight_reflects_an_allowed_origin() {
    let server = server();
    let (name, value) = origin(CANONICAL_ORIGIN);

    let response = server
        .method(Method::OPTIONS, "/api/chat")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        CANONICAL_ORIGIN
    );
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_METHODS),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(response.header(header::ACCESS_CONTROL_MAX_AGE), "86400");
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        "true"
    );
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn preflight_from_an_unknown_origin_gets_the_default() {
    let server = server();
    let (name, value) = origin("https://evil.example");

    let response = server
        .method(Method::OPTIONS, "/api/chat")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        CANONICAL_ORIGIN
    );
}

#[tokio::test]
async fn preflight_works_on_any_path() {
    let server = server();
    let (name, value) = origin(CANONICAL_ORIGIN);

    let response = server
        .method(Method::OPTIONS, "/nowhere/in/particular")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn loopback_origins_are_reflected() {
    let server = server();
    let (name, value) = origin("http://localhost:5173");

    let response = server
        .method(Method::OPTIONS, "/api/chat")
        .add_header(name, value)
        .await;

    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn regular_responses_are_cors_wrapped_too() {
    let server = server();
    let (name, value) = origin("https://evil.example");

    let response = server.get("/health").add_header(name, value).await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        CANONICAL_ORIGIN
    );
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_HEADERS),
        "Content-Type, Authorization, X-Requested-With"
    );
}

#[tokio::test]
async fn error_responses_are_cors_wrapped_too() {
    let server = server();
    let (name, value) = origin(CANONICAL_ORIGIN);

    let response = server.get("/no/such/endpoint").add_header(name, value).await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        CANONICAL_ORIGIN
    );
}
