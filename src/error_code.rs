//! Error kinds: the coarse tag every [`Error`](crate::Error) maps to.
//!
//! Callers branch on the kind (or on the `Error` variant itself) instead of
//! parsing message text.
//!
//! | Kind             | Produced by                                   | Retried by the client |
//! |------------------|-----------------------------------------------|-----------------------|
//! | `local`          | body serialization, response decoding, config | no                    |
//! | `transport`      | connect errors, timeouts before a response    | yes, linear backoff   |
//! | `authentication` | HTTP 401                                      | no                    |
//! | `validation`     | HTTP 422                                      | no                    |
//! | `rate_limited`   | HTTP 429                                      | yes, `Retry-After`    |
//! | `api`            | any other non-2xx status                      | no                    |
//! | `cancelled`      | caller token or deadline                      | no                    |
//!
//! ## Example
//!
//! ```rust
//! use relaywarden::error_code::ErrorKind;
//!
//! let kind = ErrorKind::from_http_status(429);
//! assert_eq!(kind.name(), "rate_limited");
//! assert!(kind.retryable());
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Failure on this side of the wire; the request may never have been sent.
    Local,
    /// Network failure before a response was received.
    Transport,
    /// Missing, invalid or expired credential (401).
    Authentication,
    /// Request rejected with field-level details (422).
    Validation,
    /// Too many requests (429).
    RateLimited,
    /// Any other non-success response.
    Api,
    /// The caller gave up on the call.
    Cancelled,
}

impl ErrorKind {
    /// Returns the stable name (e.g., `"rate_limited"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Transport => "transport",
            Self::Authentication => "authentication",
            Self::Validation => "validation",
            Self::RateLimited => "rate_limited",
            Self::Api => "api",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the client's retry loop will try again for this kind.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport | Self::RateLimited)
    }

    /// Maps a non-success HTTP status to the kind the classifier will produce.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Authentication,
            422 => Self::Validation,
            429 => Self::RateLimited,
            _ => Self::Api,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_and_rate_limit_retry() {
        let retryable: Vec<_> = [
            ErrorKind::Local,
            ErrorKind::Transport,
            ErrorKind::Authentication,
            ErrorKind::Validation,
            ErrorKind::RateLimited,
            ErrorKind::Api,
            ErrorKind::Cancelled,
        ]
        .into_iter()
        .filter(ErrorKind::retryable)
        .collect();
        assert_eq!(retryable, vec![ErrorKind::Transport, ErrorKind::RateLimited]);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(ErrorKind::from_http_status(401), ErrorKind::Authentication);
        assert_eq!(ErrorKind::from_http_status(422), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_http_status(429), ErrorKind::RateLimited);
        assert_eq!(ErrorKind::from_http_status(404), ErrorKind::Api);
        assert_eq!(ErrorKind::from_http_status(503).to_string(), "api");
    }
}
