use crate::client::{ApiClient, JsonObject};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Verified sender addresses.
#[derive(Clone)]
pub struct Senders {
    client: Arc<dyn ApiClient>,
}

impl Senders {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/senders", filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client.get(&format!("/senders/{}", id), None).await
    }

    pub async fn create(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client.post("/senders", Some(data), None).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/senders/{}", id)).await
    }

    /// Re-send the verification mail for the address.
    pub async fn verify(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/senders/{}/verify", id), None, None)
            .await
    }
}
