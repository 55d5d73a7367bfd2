use crate::client::{ApiClient, JsonObject};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Addresses the project will not send to.
#[derive(Clone)]
pub struct Suppressions {
    client: Arc<dyn ApiClient>,
}

impl Suppressions {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/suppressions", filters).await
    }

    pub async fn create(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client.post("/suppressions", Some(data), None).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/suppressions/{}", id)).await
    }

    /// Bulk-add entries in one request.
    pub async fn import(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client
            .post("/suppressions/import", Some(data), None)
            .await
    }
}
