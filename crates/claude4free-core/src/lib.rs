//! Core business logic for the Claude4Free proxy.
//!
//! The HTTP server crate stays thin; everything with behavior lives here:
//!
//! - **`validate`** - raw form fields → normalized request envelope
//! - **`registry`** - read-only model descriptor table
//! - **`handlers`** - the four function handlers (chat, vision, speech, image)
//! - **`upstream`** - pluggable gateway to the AI aggregation provider
//! - **`fallback`** - canned substitute replies for upstream outages
//! - **`cors`** - per-request CORS decisions

pub mod cors;
pub mod fallback;
pub mod handlers;
pub mod registry;
pub mod upstream;
pub mod validate;

pub use upstream::UpstreamError;
