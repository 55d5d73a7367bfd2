//! Caller-driven cancellation for in-flight calls.

use crate::error::CancelReason;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation sources for one call: an optional token and an optional
/// absolute deadline fixed at call start.
#[derive(Debug, Clone, Default)]
pub(crate) struct CancelSignal {
    token: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl CancelSignal {
    pub(crate) fn new(token: Option<CancellationToken>, deadline: Option<Instant>) -> Self {
        Self { token, deadline }
    }

    /// Resolves when the call should stop. Never resolves when neither source is set.
    pub(crate) async fn triggered(&self) -> CancelReason {
        match (&self.token, self.deadline) {
            (Some(token), Some(deadline)) => {
                tokio::select! {
                    _ = token.cancelled() => CancelReason::Token,
                    _ = tokio::time::sleep_until(deadline) => CancelReason::Deadline,
                }
            }
            (Some(token), None) => {
                token.cancelled().await;
                CancelReason::Token
            }
            (None, Some(deadline)) => {
                tokio::time::sleep_until(deadline).await;
                CancelReason::Deadline
            }
            (None, None) => std::future::pending().await,
        }
    }
}
