use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A decoded JSON object, the shape of every response envelope.
pub type JsonObject = serde_json::Map<String, Value>;

/// Read-only accessors for the `data`/`meta` envelope.
///
/// The client never interprets these fields itself; they are conveniences for callers.
pub trait EnvelopeExt {
    fn data(&self) -> Option<&Value>;
    fn meta(&self) -> Option<&JsonObject>;
    fn request_id(&self) -> Option<&str>;
}

impl EnvelopeExt for JsonObject {
    fn data(&self) -> Option<&Value> {
        self.get("data")
    }

    fn meta(&self) -> Option<&JsonObject> {
        self.get("meta").and_then(Value::as_object)
    }

    fn request_id(&self) -> Option<&str> {
        self.meta()
            .and_then(|m| m.get("request_id"))
            .and_then(Value::as_str)
    }
}

/// Per-call statistics for observability.
#[derive(Debug, Clone, Serialize)]
pub struct CallStats {
    pub method: String,
    pub path: String,
    /// Status of the final response.
    pub http_status: u16,
    /// Attempts made, including the successful one.
    pub attempts: u32,
    pub duration_ms: u128,
    /// `meta.request_id` of the final response, when present.
    pub request_id: Option<String>,
}

/// Token that lets the service deduplicate retried send operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    pub const HEADER: &'static str = "Idempotency-Key";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Fresh random key (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IdempotencyKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for IdempotencyKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_accessors() {
        let body = json!({
            "data": {"id": "123"},
            "meta": {"request_id": "req-123", "current_page": 1}
        });
        let obj = body.as_object().cloned().unwrap_or_default();
        assert_eq!(obj.data(), Some(&json!({"id": "123"})));
        assert_eq!(obj.request_id(), Some("req-123"));

        let empty = JsonObject::new();
        assert!(empty.data().is_none());
        assert!(empty.request_id().is_none());
    }

    #[test]
    fn generated_keys_are_unique() {
        let a = IdempotencyKey::generate();
        let b = IdempotencyKey::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn keys_and_stats_serialize_flat() {
        let key = IdempotencyKey::new("order-1");
        assert_eq!(serde_json::to_value(&key).unwrap(), json!("order-1"));

        let stats = CallStats {
            method: "POST".into(),
            path: "/messages".into(),
            http_status: 202,
            attempts: 2,
            duration_ms: 150,
            request_id: Some("req-1".into()),
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["attempts"], 2);
        assert_eq!(value["request_id"], "req-1");
    }
}
