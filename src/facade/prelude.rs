//! Minimal prelude for application code.
//!
//! Goal: reduce import noise without hiding important concepts.

pub use crate::client::{
    ApiClient, ApiRequest, CallStats, EnvelopeExt, IdempotencyKey, JsonObject, RelayWardenClient,
    RelayWardenClientBuilder,
};
pub use crate::error::{ApiError, FieldError};
pub use crate::error_code::ErrorKind;
pub use crate::facade::RelayWarden;
pub use crate::{Error, Result};
