//! # Claude4Free Types
//!
//! Serializable types shared between the proxy core and the HTTP server:
//!
//! - **`models`** - request/response envelopes and the function enum
//! - **`protocol`** - upstream wire request bodies
//! - **`config`** - immutable server configuration
//!
//! All types are designed to be:
//! - **Serializable** via serde for the browser-facing API
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod config;
pub mod models;
pub mod protocol;

pub use config::ServerConfig;
pub use models::{
    ChatRequest, ChatResponse, FunctionKind, ImageAttachment, ParseFunctionError, ResponseMode,
};
