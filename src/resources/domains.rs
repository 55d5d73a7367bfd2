use crate::client::{ApiClient, JsonObject};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Sending domains of the current project.
#[derive(Clone)]
pub struct Domains {
    client: Arc<dyn ApiClient>,
}

impl Domains {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/domains", filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client.get(&format!("/domains/{}", id), None).await
    }

    pub async fn create(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client.post("/domains", Some(data), None).await
    }

    pub async fn update(&self, id: &str, data: &Value) -> Result<Option<JsonObject>> {
        self.client.patch(&format!("/domains/{}", id), Some(data)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/domains/{}", id)).await
    }

    /// DNS records required for verification.
    pub async fn dns_records(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .get(&format!("/domains/{}/dns-records", id), None)
            .await
    }

    /// Current status of the verification checks.
    pub async fn checks(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client.get(&format!("/domains/{}/checks", id), None).await
    }

    pub async fn verify(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/domains/{}/verify", id), None, None)
            .await
    }

    /// Rotate the DKIM signing keys.
    pub async fn rotate_dkim(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/domains/{}/dkim/rotate", id), None, None)
            .await
    }

    pub async fn enable_production(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/domains/{}/enable-production", id), None, None)
            .await
    }
}
