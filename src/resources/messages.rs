use crate::client::{ApiClient, IdempotencyKey, JsonObject};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Outbound messages of the current project.
#[derive(Clone)]
pub struct Messages {
    client: Arc<dyn ApiClient>,
}

impl Messages {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    /// Send a message. With `idempotency_key`, the service drops duplicates of the same send.
    pub async fn send(
        &self,
        data: &Value,
        idempotency_key: Option<&IdempotencyKey>,
    ) -> Result<Option<JsonObject>> {
        let headers: HashMap<String, String> = idempotency_key
            .map(|key| (IdempotencyKey::HEADER.to_string(), key.as_str().to_string()))
            .into_iter()
            .collect();
        self.client.post("/messages", Some(data), Some(&headers)).await
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/messages", filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client.get(&format!("/messages/{}", id), None).await
    }

    /// Every event recorded for the message, oldest first.
    pub async fn timeline(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .get(&format!("/messages/{}/timeline", id), None)
            .await
    }

    /// Cancel a message that has not been sent yet.
    pub async fn cancel(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/messages/{}/cancel", id), None, None)
            .await
    }

    pub async fn resend(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/messages/{}/resend", id), None, None)
            .await
    }
}
