//! Error classification tests

use relaywarden::client::{classify_error, parse_retry_after, DEFAULT_RETRY_AFTER_SECS};
use relaywarden::{Error, ErrorKind};
use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use serde_json::json;

fn retry_after(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(RETRY_AFTER, HeaderValue::from_static(value));
    headers
}

#[test]
fn test_status_to_kind() {
    let body = json!({"error": {"message": "nope"}});
    let cases = [
        (401, ErrorKind::Authentication),
        (422, ErrorKind::Validation),
        (429, ErrorKind::RateLimited),
        (400, ErrorKind::Api),
        (403, ErrorKind::Api),
        (404, ErrorKind::Api),
        (500, ErrorKind::Api),
        (503, ErrorKind::Api),
    ];
    for (status, kind) in cases {
        let err = classify_error(status, &body, &HeaderMap::new());
        assert_eq!(err.kind(), kind, "status {status}");
        assert_eq!(err.status(), Some(status));
    }
}

#[test]
fn test_full_envelope_is_extracted() {
    let body = json!({
        "error": {
            "code": "validation_error",
            "message": "Validation failed",
            "details": [
                {"field": "to", "message": "required"},
                {"field": "subject", "message": "too long"}
            ]
        },
        "meta": {"request_id": "req-42"}
    });
    let err = classify_error(422, &body, &HeaderMap::new());
    let api = err.api_error().expect("classified error carries payload");
    assert_eq!(api.status, 422);
    assert_eq!(api.code, "validation_error");
    assert_eq!(api.message, "Validation failed");
    assert_eq!(api.request_id, "req-42");
    let fields: Vec<_> = api.details.iter().map(|d| d.field.as_str()).collect();
    assert_eq!(fields, ["to", "subject"]);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let err = classify_error(500, &json!({}), &HeaderMap::new());
    let api = err.api_error().unwrap();
    assert_eq!(api.code, "");
    assert_eq!(api.message, "An error occurred");
    assert_eq!(api.request_id, "");
    assert!(api.details.is_empty());
}

#[test]
fn test_mistyped_fields_do_not_abort() {
    let body = json!({
        "error": {"code": 17, "message": ["x"], "details": "not-a-list"},
        "meta": {"request_id": 99}
    });
    let err = classify_error(400, &body, &HeaderMap::new());
    let api = err.api_error().unwrap();
    assert_eq!(api.code, "");
    assert_eq!(api.message, "An error occurred");
    assert_eq!(api.request_id, "");
    assert!(api.details.is_empty());

    let body = json!({"error": {"details": [42, {"field": "to"}, "x"]}});
    let api = classify_error(422, &body, &HeaderMap::new())
        .api_error()
        .cloned()
        .unwrap();
    assert_eq!(api.details.len(), 1);
    assert_eq!(api.details[0].field, "to");
    assert_eq!(api.details[0].message, "");
}

#[test]
fn test_rate_limit_delay() {
    let body = json!({"error": {"code": "rate_limit_exceeded", "message": "slow down"}});
    match classify_error(429, &body, &retry_after("120")) {
        Error::RateLimited { retry_after, error } => {
            assert_eq!(retry_after, 120);
            assert_eq!(error.message, "slow down");
        }
        other => panic!("expected rate limit error, got {other:?}"),
    }
    match classify_error(429, &body, &HeaderMap::new()) {
        Error::RateLimited { retry_after, .. } => assert_eq!(retry_after, 60),
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[test]
fn test_retry_after_parsing() {
    assert_eq!(parse_retry_after(&retry_after("0")), 0);
    assert_eq!(parse_retry_after(&retry_after(" 15 ")), 15);
    for unusable in ["-5", "1.5", "soon", "Wed, 21 Oct 2026 07:28:00 GMT", ""] {
        assert_eq!(
            parse_retry_after(&retry_after(unusable)),
            DEFAULT_RETRY_AFTER_SECS,
            "{unusable:?}"
        );
    }
}

#[test]
fn test_display_formats() {
    let body = json!({"error": {"message": "Forbidden"}, "meta": {"request_id": "req-9"}});
    assert_eq!(
        classify_error(403, &body, &HeaderMap::new()).to_string(),
        "API error (403): Forbidden [Request ID: req-9]"
    );
    assert_eq!(
        classify_error(429, &body, &retry_after("30")).to_string(),
        "Rate limit exceeded: Forbidden [Retry after: 30 seconds, Request ID: req-9]"
    );
}

#[test]
fn test_only_transport_and_rate_limit_are_retryable() {
    assert!(ErrorKind::Transport.retryable());
    assert!(ErrorKind::RateLimited.retryable());
    for kind in [
        ErrorKind::Local,
        ErrorKind::Authentication,
        ErrorKind::Validation,
        ErrorKind::Api,
        ErrorKind::Cancelled,
    ] {
        assert!(!kind.retryable(), "{kind}");
    }
}
