//! RelayWarden client: session state, request execution and error mapping.
//!
//! Keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod api;
pub mod builder;
mod cancel;
pub mod config;
pub mod core;
pub mod error_classification;
mod execution;
mod policy;
pub mod request;
pub mod scope;
pub mod types;

pub use api::ApiClient;
pub use builder::RelayWardenClientBuilder;
pub use config::ClientConfig;
pub use core::RelayWardenClient;
pub use error_classification::{classify_error, parse_retry_after, DEFAULT_RETRY_AFTER_SECS};
pub use request::ApiRequest;
pub use scope::Scope;
pub use types::{CallStats, EnvelopeExt, IdempotencyKey, JsonObject};
