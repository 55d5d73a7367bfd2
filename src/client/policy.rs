use crate::Error;
use std::time::Duration;

/// Step between transport-failure retries: 100ms, 200ms, 300ms, ...
const TRANSPORT_BACKOFF_STEP_MS: u64 = 100;

/// Internal decision for how to proceed after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Retry { delay: Duration },
    Fail,
}

/// Retry rules for one call.
///
/// - transport failures back off linearly
/// - rate-limit errors wait the server-specified delay
/// - everything else fails immediately
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    pub max_retries: u32,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    fn transport_backoff(attempt: u32) -> Duration {
        let steps = u64::from(attempt) + 1;
        Duration::from_millis(steps.saturating_mul(TRANSPORT_BACKOFF_STEP_MS))
    }

    /// Decide what to do after `attempt` (0-based) failed with `err`.
    pub fn decide(&self, err: &Error, attempt: u32) -> Decision {
        if attempt >= self.max_retries {
            return Decision::Fail;
        }
        match err {
            Error::Transport(_) => Decision::Retry {
                delay: Self::transport_backoff(attempt),
            },
            Error::RateLimited { retry_after, .. } => Decision::Retry {
                delay: Duration::from_secs(*retry_after),
            },
            _ => Decision::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::transport::TransportError;

    fn transport_err() -> Error {
        Error::Transport(TransportError::Other("connection refused".into()))
    }

    fn api(status: u16) -> ApiError {
        ApiError {
            status,
            code: String::new(),
            message: "An error occurred".into(),
            request_id: String::new(),
            details: Vec::new(),
        }
    }

    #[test]
    fn transport_backoff_is_linear() {
        let policy = RetryPolicy::new(3);
        let delays: Vec<_> = (0..3)
            .map(|attempt| policy.decide(&transport_err(), attempt))
            .collect();
        assert_eq!(
            delays,
            vec![
                Decision::Retry { delay: Duration::from_millis(100) },
                Decision::Retry { delay: Duration::from_millis(200) },
                Decision::Retry { delay: Duration::from_millis(300) },
            ]
        );
        assert_eq!(policy.decide(&transport_err(), 3), Decision::Fail);
        assert_eq!(policy.max_attempts(), 4);
    }

    #[test]
    fn rate_limit_uses_server_delay() {
        let policy = RetryPolicy::new(1);
        let err = Error::RateLimited {
            error: api(429),
            retry_after: 60,
        };
        assert_eq!(
            policy.decide(&err, 0),
            Decision::Retry { delay: Duration::from_secs(60) }
        );
        assert_eq!(policy.decide(&err, 1), Decision::Fail);
    }

    #[test]
    fn zero_budget_never_retries() {
        let policy = RetryPolicy::new(0);
        let err = Error::RateLimited {
            error: api(429),
            retry_after: 60,
        };
        assert_eq!(policy.decide(&err, 0), Decision::Fail);
        assert_eq!(policy.decide(&transport_err(), 0), Decision::Fail);
    }

    #[test]
    fn classified_and_local_errors_fail_fast() {
        let policy = RetryPolicy::new(5);
        for err in [
            Error::Authentication(api(401)),
            Error::Validation(api(422)),
            Error::Api(api(500)),
            Error::UnexpectedStatus { status: 503 },
            Error::configuration("bad"),
        ] {
            assert_eq!(policy.decide(&err, 0), Decision::Fail, "{err}");
        }
    }
}
