use crate::client::config::ClientConfig;
use crate::client::core::RelayWardenClient;
use crate::client::scope::Scope;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Explicit values win over `RELAYWARDEN_*` environment variables, which win
/// over built-in defaults.
#[derive(Default)]
pub struct RelayWardenClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    max_retries: Option<u32>,
    timeout: Option<Duration>,
    project_id: Option<String>,
    team_id: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl RelayWardenClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// API root, e.g. `https://api.relaywarden.eu/api/v1`. Required.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Bearer credential. Required.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Retries after the first attempt.
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = Some(n);
        self
    }

    /// Per-attempt request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Initial project scope.
    pub fn project_scope(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Initial team scope.
    pub fn team_scope(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Use a preconfigured `reqwest::Client`. Its own timeout and pool settings apply.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<RelayWardenClient> {
        let base_url = self
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| Error::configuration("base url must be specified"))?;
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::configuration("API token must be specified"))?;
        url::Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base url: {}", e),
                ErrorContext::new()
                    .with_details(base_url.clone())
                    .with_source("client_builder"),
            )
        })?;

        let mut config = ClientConfig::from_env(base_url, token);
        if let Some(n) = self.max_retries {
            config.max_retries = n;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        let transport = match self.http_client {
            Some(client) => HttpTransport::from_client(client),
            None => HttpTransport::new(&config)?,
        };
        let scope = Scope {
            project_id: self.project_id,
            team_id: self.team_id,
        };

        Ok(RelayWardenClient::from_parts(config, transport, scope))
    }
}
