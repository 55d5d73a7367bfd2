use crate::client::{ApiClient, RelayWardenClient};
use crate::resources::{
    AuditLogs, Compliance, Domains, Events, Identity, Messages, Projects, Senders, ServiceAccounts,
    Suppressions, Templates, Usage, Webhooks,
};
use crate::Result;
use std::sync::Arc;

/// All resources over one shared client session.
///
/// Scope changes made through the facade are visible to every resource.
#[derive(Clone)]
pub struct RelayWarden {
    client: Arc<RelayWardenClient>,
    pub identity: Identity,
    pub projects: Projects,
    pub service_accounts: ServiceAccounts,
    pub domains: Domains,
    pub senders: Senders,
    pub templates: Templates,
    pub messages: Messages,
    pub events: Events,
    pub suppressions: Suppressions,
    pub webhooks: Webhooks,
    pub usage: Usage,
    pub audit_logs: AuditLogs,
    pub compliance: Compliance,
}

impl RelayWarden {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_client(RelayWardenClient::new(base_url, token)?))
    }

    pub fn from_client(client: RelayWardenClient) -> Self {
        let client = Arc::new(client);
        let api: Arc<dyn ApiClient> = client.clone();
        Self {
            client,
            identity: Identity::new(api.clone()),
            projects: Projects::new(api.clone()),
            service_accounts: ServiceAccounts::new(api.clone()),
            domains: Domains::new(api.clone()),
            senders: Senders::new(api.clone()),
            templates: Templates::new(api.clone()),
            messages: Messages::new(api.clone()),
            events: Events::new(api.clone()),
            suppressions: Suppressions::new(api.clone()),
            webhooks: Webhooks::new(api.clone()),
            usage: Usage::new(api.clone()),
            audit_logs: AuditLogs::new(api.clone()),
            compliance: Compliance::new(api),
        }
    }

    /// The underlying client, for raw [`execute`](RelayWardenClient::execute) calls.
    pub fn client(&self) -> &Arc<RelayWardenClient> {
        &self.client
    }

    pub fn set_project_scope(&self, project_id: impl Into<String>) {
        self.client.set_project_scope(project_id);
    }

    pub fn project_scope(&self) -> Option<String> {
        self.client.project_scope()
    }

    pub fn set_team_scope(&self, team_id: impl Into<String>) {
        self.client.set_team_scope(team_id);
    }

    pub fn team_scope(&self) -> Option<String> {
        self.client.team_scope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_is_shared_with_client() {
        let rw = RelayWarden::new("https://api.relaywarden.eu/api/v1", "test-token").unwrap();
        rw.set_project_scope("project-123");
        rw.set_team_scope("team-7");
        assert_eq!(rw.client().project_scope().as_deref(), Some("project-123"));
        assert_eq!(rw.team_scope().as_deref(), Some("team-7"));
    }
}
