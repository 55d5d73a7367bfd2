//! Project/team scope carried as request headers.

use arc_swap::ArcSwap;
use std::sync::Arc;

pub const PROJECT_HEADER: &str = "x-project-id";
pub const TEAM_HEADER: &str = "x-team-id";

/// The scope identifiers in effect for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub project_id: Option<String>,
    pub team_id: Option<String>,
}

/// Mutable scope record shared by all calls on one client.
///
/// Updates replace the whole record atomically; readers take a snapshot and
/// never observe a half-applied change.
#[derive(Debug, Default)]
pub(crate) struct ScopeCell {
    inner: ArcSwap<Scope>,
}

impl ScopeCell {
    pub(crate) fn new(initial: Scope) -> Self {
        Self {
            inner: ArcSwap::from_pointee(initial),
        }
    }

    pub(crate) fn snapshot(&self) -> Arc<Scope> {
        self.inner.load_full()
    }

    pub(crate) fn update(&self, f: impl Fn(&mut Scope)) {
        self.inner.rcu(|current| {
            let mut next = Scope::clone(current);
            f(&mut next);
            next
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_isolated_from_later_updates() {
        let cell = ScopeCell::new(Scope::default());
        cell.update(|s| s.project_id = Some("project-123".into()));
        let before = cell.snapshot();

        cell.update(|s| s.team_id = Some("team-9".into()));

        assert_eq!(before.project_id.as_deref(), Some("project-123"));
        assert_eq!(before.team_id, None);

        let after = cell.snapshot();
        assert_eq!(after.project_id.as_deref(), Some("project-123"));
        assert_eq!(after.team_id.as_deref(), Some("team-9"));
    }
}
