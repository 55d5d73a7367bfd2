//! Error classification logic
//!
//! Maps a non-success response to a typed [`Error`]. Every field of the error
//! envelope is read independently; a missing or mistyped field falls back to
//! its default and never aborts classification.

use crate::error::{ApiError, FieldError};
use crate::Error;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::Value;

/// Delay used when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

const DEFAULT_MESSAGE: &str = "An error occurred";

/// Classify a failed response. Total: any status and any body yields an error.
pub fn classify_error(status: u16, body: &Value, headers: &HeaderMap) -> Error {
    let api = extract_api_error(status, body);
    match status {
        401 => Error::Authentication(api),
        422 => Error::Validation(api),
        429 => Error::RateLimited {
            error: api,
            retry_after: parse_retry_after(headers),
        },
        _ => Error::Api(api),
    }
}

/// `Retry-After` as whole seconds.
///
/// Only the delta-seconds form is understood; an absent header, an HTTP-date,
/// a negative or fractional value all yield [`DEFAULT_RETRY_AFTER_SECS`].
pub fn parse_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn extract_api_error(status: u16, body: &Value) -> ApiError {
    let error = body.get("error");

    let request_id = body
        .get("meta")
        .and_then(|m| m.get("request_id"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let code = error
        .and_then(|e| e.get("code"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_MESSAGE)
        .to_string();
    let details = error
        .and_then(|e| e.get("details"))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(field_error).collect())
        .unwrap_or_default();

    ApiError {
        status,
        code,
        message,
        request_id,
        details,
    }
}

// Non-object entries are skipped.
fn field_error(entry: &Value) -> Option<FieldError> {
    let entry = entry.as_object()?;
    let text = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Some(FieldError {
        field: text("field"),
        message: text("message"),
    })
}
