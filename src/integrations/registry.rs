//! The set of integrations this build knows about.
//!
//! Assembled once at startup and handed to the command handlers.

use super::{clockify::Clockify, jira, Backend, IntegrationKind};

struct Entry {
    kind: IntegrationKind,
    name: &'static str,
    build: fn() -> Backend,
}

/// Ordered catalogue of integration backends.
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Every backend shipped with the binary.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(IntegrationKind::Board, "Jira", || {
            Backend::JiraBoard(jira::JiraBoard::new())
        });
        registry.register(IntegrationKind::Clock, "Clockify", || {
            Backend::Clockify(Clockify::new())
        });
        registry.register(IntegrationKind::Clock, "Jira", || {
            Backend::JiraClock(jira::JiraClock::new())
        });
        registry
    }

    /// Add a backend.  Registering the same `(kind, name)` again replaces
    /// the earlier constructor in place.
    pub fn register(&mut self, kind: IntegrationKind, name: &'static str, build: fn() -> Backend) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.kind == kind && e.name == name)
        {
            Some(existing) => existing.build = build,
            None => self.entries.push(Entry { kind, name, build }),
        }
    }

    /// Kinds with at least one backend, in registration order.
    pub fn kinds(&self) -> Vec<IntegrationKind> {
        let mut kinds = Vec::new();
        for entry in &self.entries {
            if !kinds.contains(&entry.kind) {
                kinds.push(entry.kind);
            }
        }
        kinds
    }

    /// Backend names for `kind`, in registration order.
    pub fn providers(&self, kind: IntegrationKind) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.name)
            .collect()
    }

    /// Construct the backend registered as `(kind, name)`.
    pub fn build(&self, kind: IntegrationKind, name: &str) -> Option<Backend> {
        self.entries
            .iter()
            .find(|e| e.kind == kind && e.name == name)
            .map(|e| (e.build)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::Integration;

    #[test]
    fn test_builtin_catalogue() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.kinds(),
            vec![IntegrationKind::Board, IntegrationKind::Clock]
        );
        assert_eq!(registry.providers(IntegrationKind::Board), vec!["Jira"]);
        assert_eq!(
            registry.providers(IntegrationKind::Clock),
            vec!["Clockify", "Jira"]
        );
    }

    #[test]
    fn test_build_matches_kind_and_name() {
        let registry = Registry::builtin();

        let board = registry.build(IntegrationKind::Board, "Jira").unwrap();
        assert!(matches!(board, Backend::JiraBoard(_)));
        assert_eq!(board.kind(), IntegrationKind::Board);

        let clock = registry.build(IntegrationKind::Clock, "Jira").unwrap();
        assert!(matches!(clock, Backend::JiraClock(_)));

        assert!(registry.build(IntegrationKind::Board, "Clockify").is_none());
        assert!(registry.build(IntegrationKind::Clock, "Toggl").is_none());
    }

    #[test]
    fn test_register_replaces_duplicates() {
        let mut registry = Registry::empty();
        assert!(registry.kinds().is_empty());

        registry.register(IntegrationKind::Clock, "Clockify", || {
            Backend::JiraClock(jira::JiraClock::new())
        });
        registry.register(IntegrationKind::Clock, "Clockify", || {
            Backend::Clockify(Clockify::new())
        });

        assert_eq!(registry.providers(IntegrationKind::Clock), vec!["Clockify"]);
        assert!(matches!(
            registry.build(IntegrationKind::Clock, "Clockify"),
            Some(Backend::Clockify(_))
        ));
    }
}
