use crate::client::builder::RelayWardenClientBuilder;
use crate::client::config::ClientConfig;
use crate::client::policy::RetryPolicy;
use crate::client::request::ApiRequest;
use crate::client::scope::{Scope, ScopeCell};
use crate::client::types::JsonObject;
use crate::transport::HttpTransport;
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Client session for the RelayWarden API.
///
/// Holds the immutable configuration, the pooled HTTP transport and the
/// mutable project/team scope. Share it behind an `Arc`; all methods take `&self`.
pub struct RelayWardenClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: HttpTransport,
    pub(crate) scope: ScopeCell,
    pub(crate) policy: RetryPolicy,
}

impl RelayWardenClient {
    /// Client with env-overridable defaults for everything but the endpoint and token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        RelayWardenClientBuilder::new()
            .base_url(base_url)
            .token(token)
            .build()
    }

    pub fn builder() -> RelayWardenClientBuilder {
        RelayWardenClientBuilder::new()
    }

    pub(crate) fn from_parts(config: ClientConfig, transport: HttpTransport, scope: Scope) -> Self {
        let policy = RetryPolicy::new(config.max_retries);
        Self {
            config,
            transport,
            scope: ScopeCell::new(scope),
            policy,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sets the project ID sent as `X-Project-Id` on every subsequent request.
    pub fn set_project_scope(&self, project_id: impl Into<String>) {
        let project_id = project_id.into();
        self.scope
            .update(|s| s.project_id = Some(project_id.clone()));
    }

    pub fn project_scope(&self) -> Option<String> {
        self.scope.snapshot().project_id.clone()
    }

    pub fn clear_project_scope(&self) {
        self.scope.update(|s| s.project_id = None);
    }

    /// Sets the team ID sent as `X-Team-Id` on every subsequent request.
    pub fn set_team_scope(&self, team_id: impl Into<String>) {
        let team_id = team_id.into();
        self.scope.update(|s| s.team_id = Some(team_id.clone()));
    }

    pub fn team_scope(&self) -> Option<String> {
        self.scope.snapshot().team_id.clone()
    }

    pub fn clear_team_scope(&self) {
        self.scope.update(|s| s.team_id = None);
    }

    /// Current scope as one consistent snapshot.
    pub fn scope(&self) -> Scope {
        Scope::clone(&self.scope.snapshot())
    }

    /// GET `path`, with optional query parameters.
    pub async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>> {
        let mut request = ApiRequest::get(path);
        if let Some(query) = query {
            request = request.query(query.clone());
        }
        self.execute(request).await
    }

    /// POST `path`, with an optional JSON body and extra headers.
    pub async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Option<JsonObject>> {
        let mut request = ApiRequest::post(path);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(headers) = headers {
            request = request.headers(headers);
        }
        self.execute(request).await
    }

    /// PATCH `path`, with an optional JSON body.
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Option<JsonObject>> {
        let mut request = ApiRequest::patch(path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    /// DELETE `path`. Any success body is discarded.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(ApiRequest::delete(path)).await.map(|_| ())
    }

    /// Run one logical operation with authentication, retry and error classification.
    ///
    /// Returns the decoded response object, or `None` for 204 and empty bodies.
    pub async fn execute(&self, request: ApiRequest) -> Result<Option<JsonObject>> {
        self.execute_with_stats(request)
            .await
            .map(|(body, _stats)| body)
    }
}

impl std::fmt::Debug for RelayWardenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayWardenClient")
            .field("base_url", &self.config.base_url)
            .field("max_retries", &self.config.max_retries)
            .field("timeout", &self.config.timeout)
            .field("scope", &self.scope.snapshot())
            .finish_non_exhaustive()
    }
}
