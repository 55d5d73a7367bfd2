use crate::client::{ApiClient, JsonObject};
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Delivery events (delivered, bounced, opened, ...).
#[derive(Clone)]
pub struct Events {
    client: Arc<dyn ApiClient>,
}

impl Events {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/events", filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<JsonObject>> {
        self.client.get(&format!("/events/{}", id), None).await
    }
}
