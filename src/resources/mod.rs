//! Resource modules: fixed paths over the [`ApiClient`](crate::client::ApiClient) capability.
//!
//! Each method maps to exactly one endpoint and passes payloads through untouched.

mod audit_logs;
mod compliance;
mod domains;
mod events;
mod identity;
mod messages;
mod projects;
mod senders;
mod service_accounts;
mod suppressions;
mod templates;
mod usage;
mod webhooks;

pub use audit_logs::AuditLogs;
pub use compliance::Compliance;
pub use domains::Domains;
pub use events::Events;
pub use identity::Identity;
pub use messages::Messages;
pub use projects::Projects;
pub use senders::Senders;
pub use service_accounts::ServiceAccounts;
pub use suppressions::Suppressions;
pub use templates::Templates;
pub use usage::Usage;
pub use webhooks::Webhooks;
