use crate::client::{ApiClient, JsonObject};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Message templates and their versions.
#[derive(Clone)]
pub struct Templates {
    client: Arc<dyn ApiClient>,
}

impl Templates {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/templates", filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client.get(&format!("/templates/{}", id), None).await
    }

    pub async fn create(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client.post("/templates", Some(data), None).await
    }

    pub async fn update(&self, id: &str, data: &Value) -> Result<Option<JsonObject>> {
        self.client.patch(&format!("/templates/{}", id), Some(data)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/templates/{}", id)).await
    }

    pub async fn list_versions(
        &self,
        id: &str,
        filters: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>> {
        self.client
            .get(&format!("/templates/{}/versions", id), filters)
            .await
    }

    pub async fn create_version(&self, id: &str, data: &Value) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/templates/{}/versions", id), Some(data), None)
            .await
    }

    /// Render the template server-side with the given variables.
    pub async fn render(&self, id: &str, data: &Value) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/templates/{}/render", id), Some(data), None)
            .await
    }

    pub async fn test_send(&self, id: &str, data: &Value) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/templates/{}/test-send", id), Some(data), None)
            .await
    }
}
