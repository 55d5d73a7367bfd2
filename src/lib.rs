//! # relaywarden
//!
//! Async Rust client for the RelayWarden email API.
//!
//! ## Overview
//!
//! The heart of the crate is a small request engine: it turns a logical
//! operation (method, path, body, headers) into an HTTP call, injects the
//! bearer credential and project/team scope headers, retries transient
//! failures, and maps error responses onto a typed [`Error`].
//!
//! - **Typed errors**: match on [`Error`] variants or [`Error::kind`], never on message text
//! - **Retry**: transport failures back off linearly (100ms, 200ms, ...); 429 honours `Retry-After`
//! - **Scope**: `X-Project-Id` / `X-Team-Id` follow the session until changed
//! - **Cancellation**: per-request `CancellationToken` and deadline
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use relaywarden::RelayWarden;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> relaywarden::Result<()> {
//!     let rw = RelayWarden::new("https://api.relaywarden.eu/api/v1", "your-token")?;
//!     rw.set_project_scope("project-123");
//!
//!     let sent = rw
//!         .messages
//!         .send(
//!             &json!({
//!                 "from": {"email": "noreply@example.com"},
//!                 "to": [{"email": "user@example.com"}],
//!                 "subject": "Hello",
//!                 "html": "<h1>Hello</h1>"
//!             }),
//!             None,
//!         )
//!         .await?;
//!     println!("{:?}", sent);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Session, request execution, retry and error classification |
//! | [`transport`] | Single-attempt HTTP exchange and query encoding |
//! | [`resources`] | Endpoint wrappers (domains, messages, templates, ...) |
//! | [`facade`] | `RelayWarden` bundle and prelude |
//! | [`error_code`] | Coarse error kinds |

pub mod client;
pub mod error_code;
pub mod facade;
pub mod resources;
pub mod transport;

// Re-export main types for convenience
pub use client::{
    ApiClient, ApiRequest, CallStats, ClientConfig, EnvelopeExt, IdempotencyKey, JsonObject,
    RelayWardenClient, RelayWardenClientBuilder, Scope,
};
pub use error_code::ErrorKind;
pub use facade::{prelude, RelayWarden};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ApiError, CancelReason, Error, ErrorContext, FieldError};

// Callers pass tokens through `ApiRequest::cancel_token`.
pub use tokio_util::sync::CancellationToken;
