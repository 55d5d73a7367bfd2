use crate::client::{ApiClient, JsonObject};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Webhook endpoints and their deliveries.
#[derive(Clone)]
pub struct Webhooks {
    client: Arc<dyn ApiClient>,
}

impl Webhooks {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_endpoints(
        &self,
        filters: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>> {
        self.client.get("/webhooks/endpoints", filters).await
    }

    pub async fn create_endpoint(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client
            .post("/webhooks/endpoints", Some(data), None)
            .await
    }

    pub async fn update_endpoint(&self, id: &str, data: &Value) -> Result<Option<JsonObject>> {
        self.client
            .patch(&format!("/webhooks/endpoints/{}", id), Some(data))
            .await
    }

    pub async fn delete_endpoint(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("/webhooks/endpoints/{}", id))
            .await
    }

    pub async fn list_deliveries(
        &self,
        endpoint_id: &str,
        filters: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>> {
        self.client
            .get(&format!("/webhooks/endpoints/{}/deliveries", endpoint_id), filters)
            .await
    }

    /// Fire a test event at the endpoint.
    pub async fn test_endpoint(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/webhooks/endpoints/{}/test", id), None, None)
            .await
    }

    pub async fn replay_delivery(&self, delivery_id: &str) -> Result<Option<JsonObject>> {
        self.client
            .post(&format!("/webhooks/deliveries/{}/replay", delivery_id), None, None)
            .await
    }
}
