use crate::client::{ApiClient, JsonObject};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Non-human principals and their API tokens.
#[derive(Clone)]
pub struct ServiceAccounts {
    client: Arc<dyn ApiClient>,
}

impl ServiceAccounts {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: Option<&HashMap<String, String>>) -> Result<Option<JsonObject>> {
        self.client.get("/service-accounts", filters).await
    }

    pub async fn create(&self, data: &Value) -> Result<Option<JsonObject>> {
        self.client.post("/service-accounts", Some(data), None).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/service-accounts/{}", id)).await
    }

    /// Issue a token for the account. The secret is only returned here.
    pub async fn create_token(&self, service_account_id: &str, data: &Value) -> Result<Option<JsonObject>> {
        self.client
            .post(
                &format!("/service-accounts/{}/tokens", service_account_id),
                Some(data),
                None,
            )
            .await
    }

    /// Revoke a token by its own id.
    pub async fn delete_token(&self, token_id: &str) -> Result<()> {
        self.client.delete(&format!("/tokens/{}", token_id)).await
    }
}
