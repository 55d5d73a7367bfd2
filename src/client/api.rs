//! The capability surface resource modules are written against.

use crate::client::core::RelayWardenClient;
use crate::client::types::JsonObject;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Verb-level access to the API plus the session scope.
///
/// Resource modules only ever see this trait, so they can be exercised
/// against an in-memory implementation.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>>;

    async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>>;

    async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Option<JsonObject>>;

    async fn delete(&self, path: &str) -> Result<()>;

    fn set_project_scope(&self, project_id: String);
    fn project_scope(&self) -> Option<String>;
    fn set_team_scope(&self, team_id: String);
    fn team_scope(&self) -> Option<String>;
}

#[async_trait]
impl ApiClient for RelayWardenClient {
    async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>> {
        RelayWardenClient::get(self, path, query).await
    }

    async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>> {
        RelayWardenClient::post(self, path, body, headers).await
    }

    async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Option<JsonObject>> {
        RelayWardenClient::patch(self, path, body).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        RelayWardenClient::delete(self, path).await
    }

    fn set_project_scope(&self, project_id: String) {
        RelayWardenClient::set_project_scope(self, project_id)
    }

    fn project_scope(&self) -> Option<String> {
        RelayWardenClient::project_scope(self)
    }

    fn set_team_scope(&self, team_id: String) {
        RelayWardenClient::set_team_scope(self, team_id)
    }

    fn team_scope(&self) -> Option<String> {
        RelayWardenClient::team_scope(self)
    }
}
