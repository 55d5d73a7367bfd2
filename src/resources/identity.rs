use crate::client::{ApiClient, JsonObject};
use crate::Result;
use std::sync::Arc;

/// Who the credential belongs to.
#[derive(Clone)]
pub struct Identity {
    client: Arc<dyn ApiClient>,
}

impl Identity {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    /// The authenticated user or service account.
    pub async fn me(&self) -> Result<Option<JsonObject>> {
        self.client.get("/me", None).await
    }

    /// Teams the authenticated user belongs to.
    pub async fn teams(&self) -> Result<Option<JsonObject>> {
        self.client.get("/teams", None).await
    }
}
