use crate::client::types::IdempotencyKey;
use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// One logical operation: method, path, optional body, query and extra headers.
///
/// Built per call and consumed by [`RelayWardenClient::execute`](crate::RelayWardenClient::execute).
#[derive(Debug)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Option<HashMap<String, String>>,
    // Serialized eagerly; a failure is reported by `execute` before any I/O.
    pub(crate) body: Option<Result<Bytes, serde_json::Error>>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) cancel_token: Option<CancellationToken>,
    pub(crate) deadline: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            headers: Vec::new(),
            cancel_token: None,
            deadline: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Query parameters appended to the path (sorted, form-encoded).
    pub fn query(mut self, params: HashMap<String, String>) -> Self {
        self.query = Some(params);
        self
    }

    /// JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_vec(body).map(Bytes::from));
        self
    }

    /// Extra header. Replaces any default or scope header with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        self.headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn idempotency_key(self, key: impl Into<IdempotencyKey>) -> Self {
        let key = key.into();
        self.header(IdempotencyKey::HEADER, key.as_str())
    }

    /// Abort the call (including pending backoff sleeps) when `token` is cancelled.
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// Overall budget for the call across all attempts, measured from call start.
    pub fn deadline(mut self, after: Duration) -> Self {
        self.deadline = Some(after);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
