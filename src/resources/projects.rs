use crate::client::{ApiClient, JsonObject};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Projects of the current team.
#[derive(Clone)]
pub struct Projects {
    client: Arc<dyn ApiClient>,
}

impl Projects {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/projects", filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client.get(&format!("/projects/{}", id), None).await
    }

    pub async fn create(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client.post("/projects", Some(data), None).await
    }

    pub async fn update(&self, id: &str, data: &Value) -> Result<Option<JsonObject>> {
        self.client.patch(&format!("/projects/{}", id), Some(data)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/projects/{}", id)).await
    }
}
