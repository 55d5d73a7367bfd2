use crate::client::{ApiClient, JsonObject};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

/// Data retention and export settings.
#[derive(Clone)]
pub struct Compliance {
    client: Arc<dyn ApiClient>,
}

impl Compliance {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn retention(&self) -> Result<Option<JsonObject>> {
        self.client.get("/compliance/retention", None).await
    }

    pub async fn update_retention(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client
            .patch("/compliance/retention", Some(data))
            .await
    }

    /// Available export formats and their configuration.
    pub async fn export_config(&self) -> Result<Option<JsonObject>> {
        self.client.get("/compliance/exports/config", None).await
    }
}
