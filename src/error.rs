use crate::error_code::ErrorKind;
use std::fmt;
use thiserror::Error;

/// Structured error context for local failures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Additional context about the error (e.g., offending header name)
    pub details: Option<String>,
    /// Source of the error (e.g., "request_body", "response_decode")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// One field-level entry from `error.details[]` of an error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Payload shared by every classified remote failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Machine error code from `error.code` (empty when absent).
    pub code: String,
    /// Human message from `error.message`.
    pub message: String,
    /// Correlation id from `meta.request_id` (empty when absent).
    pub request_id: String,
    /// Field-level entries from `error.details`.
    pub details: Vec<FieldError>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API error ({}): {} [Request ID: {}]",
            self.status, self.message, self.request_id
        )
    }
}

/// Why a call stopped before producing a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The caller's cancellation token fired.
    Token,
    /// The per-request deadline elapsed.
    Deadline,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Token => f.write_str("cancelled by caller"),
            CancelReason::Deadline => f.write_str("deadline exceeded"),
        }
    }
}

/// Unified error type for the RelayWarden client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}{}", format_context(.context))]
    Decode {
        message: String,
        context: ErrorContext,
    },

    #[error("Invalid request: {message}{}", format_context(.context))]
    InvalidRequest {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Authentication failed: {} [Request ID: {}]", .0.message, .0.request_id)]
    Authentication(ApiError),

    #[error("Validation failed: {} [Request ID: {}]", .0.message, .0.request_id)]
    Validation(ApiError),

    #[error(
        "Rate limit exceeded: {} [Retry after: {retry_after} seconds, Request ID: {}]",
        .error.message,
        .error.request_id
    )]
    RateLimited { error: ApiError, retry_after: u64 },

    #[error("{0}")]
    Api(ApiError),

    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Request cancelled: {0}")]
    Cancelled(CancelReason),

    #[error("request failed after {max_retries} retries")]
    RetriesExhausted { max_retries: u32 },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn decode_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Decode {
            message: msg.into(),
            context,
        }
    }

    pub fn invalid_request_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidRequest {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Coarse tag for branching on the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Serialization(_)
            | Error::Decode { .. }
            | Error::InvalidRequest { .. }
            | Error::Configuration { .. } => ErrorKind::Local,
            Error::Transport(_) | Error::RetriesExhausted { .. } => ErrorKind::Transport,
            Error::Authentication(_) => ErrorKind::Authentication,
            Error::Validation(_) => ErrorKind::Validation,
            Error::RateLimited { .. } => ErrorKind::RateLimited,
            Error::Api(_) | Error::UnexpectedStatus { .. } => ErrorKind::Api,
            Error::Cancelled(_) => ErrorKind::Cancelled,
        }
    }

    /// The remote error payload, for classified failures.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Authentication(e) | Error::Validation(e) | Error::Api(e) => Some(e),
            Error::RateLimited { error, .. } => Some(error),
            _ => None,
        }
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status } => Some(*status),
            other => other.api_error().map(|e| e.status),
        }
    }

    /// Correlation id reported by the service, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.api_error().map(|e| e.request_id.as_str())
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Decode { context, .. }
            | Error::InvalidRequest { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: u16) -> ApiError {
        ApiError {
            status,
            code: "rate_limit_exceeded".into(),
            message: "Rate limit exceeded".into(),
            request_id: "req-123".into(),
            details: Vec::new(),
        }
    }

    #[test]
    fn display_matches_service_wording() {
        let auth = Error::Authentication(ApiError {
            message: "Unauthenticated".into(),
            ..sample(401)
        });
        assert_eq!(
            auth.to_string(),
            "Authentication failed: Unauthenticated [Request ID: req-123]"
        );

        let limited = Error::RateLimited {
            error: sample(429),
            retry_after: 60,
        };
        assert_eq!(
            limited.to_string(),
            "Rate limit exceeded: Rate limit exceeded [Retry after: 60 seconds, Request ID: req-123]"
        );

        assert_eq!(
            Error::Api(sample(500)).to_string(),
            "API error (500): Rate limit exceeded [Request ID: req-123]"
        );
    }

    #[test]
    fn kind_and_accessors() {
        let err = Error::RateLimited {
            error: sample(429),
            retry_after: 5,
        };
        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.request_id(), Some("req-123"));

        let unexpected = Error::UnexpectedStatus { status: 502 };
        assert_eq!(unexpected.kind(), ErrorKind::Api);
        assert_eq!(unexpected.status(), Some(502));
        assert_eq!(unexpected.request_id(), None);

        assert_eq!(Error::Cancelled(CancelReason::Deadline).kind(), ErrorKind::Cancelled);
    }

    #[test]
    fn local_errors_render_context() {
        let err = Error::decode_with_context(
            "expected JSON object",
            ErrorContext::new().with_source("response_decode"),
        );
        assert_eq!(err.kind(), ErrorKind::Local);
        assert_eq!(
            err.to_string(),
            "Failed to decode response: expected JSON object (source: response_decode)"
        );
    }
}
