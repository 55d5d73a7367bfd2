use crate::client::{ApiClient, JsonObject};
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Sending volume, plan limits and account diagnostics.
#[derive(Clone)]
pub struct Usage {
    client: Arc<dyn ApiClient>,
}

impl Usage {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    /// Per-day counters; filter with e.g. `from` / `to`.
    pub async fn daily(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/usage/daily", filters).await
    }

    pub async fn limits(&self) -> Result<Option<JsonObject>> {
        self.client.get("/limits", None).await
    }

    pub async fn diagnostics(&self) -> Result<Option<JsonObject>> {
        self.client.get("/diagnostics", None).await
    }
}
