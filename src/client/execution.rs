//! Request execution: header assembly, the retry loop and response interpretation.

use crate::client::cancel::CancelSignal;
use crate::client::error_classification::classify_error;
use crate::client::policy::Decision;
use crate::client::request::ApiRequest;
use crate::client::scope::{PROJECT_HEADER, TEAM_HEADER};
use crate::client::types::{CallStats, EnvelopeExt, JsonObject};
use crate::transport::{append_query, PreparedRequest, RawResponse};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

use super::core::RelayWardenClient;

const JSON: &str = "application/json";

impl RelayWardenClient {
    /// Like [`execute`](Self::execute), also returning per-call statistics.
    pub async fn execute_with_stats(
        &self,
        request: ApiRequest,
    ) -> Result<(Option<JsonObject>, CallStats)> {
        let start = Instant::now();
        let signal = CancelSignal::new(
            request.cancel_token.clone(),
            // A deadline past the representable range means no deadline.
            request.deadline.and_then(|after| start.checked_add(after)),
        );
        let method = request.method.to_string();
        let path = request.path.clone();
        let prepared = self.prepare(request)?;

        let mut last_error = None;
        for attempt in 0..self.policy.max_attempts() {
            debug!(
                method = method.as_str(),
                path = path.as_str(),
                attempt,
                "relaywarden request attempt"
            );

            let outcome = tokio::select! {
                biased;
                reason = signal.triggered() => return Err(Error::Cancelled(reason)),
                outcome = self.attempt(&prepared) => outcome,
            };

            let err = match outcome {
                Ok((http_status, body)) => {
                    let stats = CallStats {
                        method,
                        path,
                        http_status,
                        attempts: attempt + 1,
                        duration_ms: start.elapsed().as_millis(),
                        request_id: body
                            .as_ref()
                            .and_then(|b| b.request_id())
                            .map(str::to_string),
                    };
                    debug!(
                        http_status,
                        attempts = stats.attempts,
                        duration_ms = stats.duration_ms,
                        "relaywarden request succeeded"
                    );
                    return Ok((body, stats));
                }
                Err(err) => err,
            };

            match self.policy.decide(&err, attempt) {
                Decision::Retry { delay } => {
                    warn!(
                        error_kind = err.kind().name(),
                        delay_ms = delay.as_millis(),
                        attempt,
                        path = path.as_str(),
                        "relaywarden request failed, retrying"
                    );
                    tokio::select! {
                        biased;
                        reason = signal.triggered() => return Err(Error::Cancelled(reason)),
                        _ = tokio::time::sleep(delay) => {}
                    }
                    last_error = Some(err);
                }
                Decision::Fail => {
                    info!(
                        http_status = err.status().unwrap_or_default(),
                        error_kind = err.kind().name(),
                        request_id = err.request_id().unwrap_or(""),
                        method = method.as_str(),
                        path = path.as_str(),
                        attempts = attempt + 1,
                        duration_ms = start.elapsed().as_millis(),
                        "relaywarden request failed"
                    );
                    return Err(err);
                }
            }
        }

        Err(last_error.unwrap_or(Error::RetriesExhausted {
            max_retries: self.policy.max_retries,
        }))
    }

    /// Build the wire request once: body, URL and headers from a single scope snapshot.
    fn prepare(&self, request: ApiRequest) -> Result<PreparedRequest> {
        let body = request.body.transpose()?;
        let path = append_query(&request.path, request.query.as_ref());
        let url = self.resolve_url(&path)?;
        let headers = self.build_headers(&request.headers)?;
        Ok(PreparedRequest {
            method: request.method,
            url,
            headers,
            body,
        })
    }

    fn resolve_url(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let full = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };
        Url::parse(&full).map_err(|e| {
            Error::invalid_request_with_context(
                format!("invalid request url '{}': {}", full, e),
                ErrorContext::new().with_source("request_url"),
            )
        })
    }

    /// Fixed headers, then scope headers, then caller headers; later entries replace earlier ones.
    fn build_headers(&self, extra: &[(String, String)]) -> Result<HeaderMap> {
        let scope = self.scope.snapshot();
        let mut headers = HeaderMap::new();

        let mut auth = header_value(&format!("Bearer {}", self.config.token), "Authorization")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));

        if let Some(project_id) = &scope.project_id {
            headers.insert(
                HeaderName::from_static(PROJECT_HEADER),
                header_value(project_id, PROJECT_HEADER)?,
            );
        }
        if let Some(team_id) = &scope.team_id {
            headers.insert(
                HeaderName::from_static(TEAM_HEADER),
                header_value(team_id, TEAM_HEADER)?,
            );
        }

        for (name, value) in extra {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                Error::invalid_request_with_context(
                    format!("invalid header name: {}", e),
                    ErrorContext::new()
                        .with_details(name.clone())
                        .with_source("request_headers"),
                )
            })?;
            headers.insert(header_name, header_value(value, name)?);
        }

        Ok(headers)
    }

    async fn attempt(&self, prepared: &PreparedRequest) -> Result<(u16, Option<JsonObject>)> {
        let response = self.transport.send(prepared).await?;
        interpret_response(response)
    }
}

fn header_value(value: &str, name: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        Error::invalid_request_with_context(
            format!("invalid value for header: {}", e),
            ErrorContext::new()
                .with_details(name.to_string())
                .with_source("request_headers"),
        )
    })
}

/// Turn a received response into a result or a classified error.
fn interpret_response(response: RawResponse) -> Result<(u16, Option<JsonObject>)> {
    let status = response.status;
    if status == 204 {
        return Ok((status, None));
    }

    if (200..300).contains(&status) {
        if response.body.is_empty() {
            return Ok((status, None));
        }
        // `null` decodes to no body, like an empty one.
        let body = serde_json::from_slice::<Option<JsonObject>>(&response.body).map_err(|e| {
            Error::decode_with_context(
                format!("failed to unmarshal response: {}", e),
                ErrorContext::new()
                    .with_details(format!("http_status: {}", status))
                    .with_source("response_decode"),
            )
        })?;
        return Ok((status, body));
    }

    // Best effort: a JSON object is classified, `null` is classified with
    // default fields, anything else is reported by status alone.
    match serde_json::from_slice::<Value>(&response.body) {
        Ok(body @ (Value::Object(_) | Value::Null)) => {
            Err(classify_error(status, &body, &response.headers))
        }
        _ => Err(Error::UnexpectedStatus { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code::ErrorKind;
    use bytes::Bytes;
    use reqwest::header::RETRY_AFTER;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn no_content_ignores_body() {
        let (status, body) = interpret_response(response(204, "{\"ignored\":true}")).unwrap();
        assert_eq!(status, 204);
        assert!(body.is_none());
    }

    #[test]
    fn success_body_is_returned_unchanged() {
        let raw = r#"{"data":{"id":"123","name":"Test"},"meta":{"request_id":"req-123"}}"#;
        for status in [200, 201, 202, 299] {
            let (_, body) = interpret_response(response(status, raw)).unwrap();
            let expected: JsonObject = serde_json::from_str(raw).unwrap();
            assert_eq!(body, Some(expected));
        }
    }

    #[test]
    fn empty_success_body_is_none() {
        let (_, body) = interpret_response(response(200, "")).unwrap();
        assert!(body.is_none());
    }

    #[test]
    fn malformed_success_body_is_local_error() {
        for raw in ["not json", "[1,2,3]", "\"text\""] {
            let err = interpret_response(response(200, raw)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Local, "{raw}");
        }
    }

    #[test]
    fn null_success_body_is_none() {
        let (status, body) = interpret_response(response(200, "null")).unwrap();
        assert_eq!(status, 200);
        assert!(body.is_none());
    }

    #[test]
    fn null_error_body_is_classified_with_defaults() {
        match interpret_response(response(422, "null")).unwrap_err() {
            Error::Validation(api) => {
                assert_eq!(api.status, 422);
                assert_eq!(api.code, "");
                assert_eq!(api.message, "An error occurred");
                assert!(api.details.is_empty());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        let err = interpret_response(response(500, " null ")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(500));
        assert!(!matches!(err, Error::UnexpectedStatus { .. }));
    }

    #[test]
    fn unparseable_error_body_is_unexpected_status() {
        for raw in ["", "<html>bad gateway</html>", "[]"] {
            let err = interpret_response(response(502, raw)).unwrap_err();
            assert!(matches!(err, Error::UnexpectedStatus { status: 502 }), "{raw}");
        }
    }

    #[test]
    fn error_object_is_classified() {
        let mut raw = response(429, r#"{"error":{"code":"rate_limit_exceeded","message":"slow down"}}"#);
        raw.headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        match interpret_response(raw).unwrap_err() {
            Error::RateLimited { error, retry_after } => {
                assert_eq!(retry_after, 7);
                assert_eq!(error.code, "rate_limit_exceeded");
            }
            other => panic!("expected rate limit error, got {other:?}"),
        }
    }
}
