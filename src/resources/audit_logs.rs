use crate::client::{ApiClient, JsonObject};
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuditLogs {
    client: Arc<dyn ApiClient>,
}

impl AuditLogs {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/audit-logs", filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client.get(&format!("/audit-logs/{}", id), None).await
    }
}
