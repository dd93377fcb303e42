//! Time-tracking integrations.
//!
//! Every backend exposes the same capability set through [`Integration`].
//! The command layer picks a backend from the [`Registry`] using the
//! selector's answer; the selector itself never sees these types.

pub mod clockify;
pub mod jira;
pub mod registry;

use std::fmt;

use chrono::{DateTime, Local};

pub use registry::Registry;

/// The two families of integration a user can connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationKind {
    /// Issue boards that tasks are picked from.
    Board,
    /// Time trackers that work is logged against.
    Clock,
}

impl IntegrationKind {
    pub fn label(self) -> &'static str {
        match self {
            IntegrationKind::Board => "Board",
            IntegrationKind::Clock => "Clock",
        }
    }
}

impl fmt::Display for IntegrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One unit of work to record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub message: String,
    pub recorded_at: DateTime<Local>,
}

impl LogEntry {
    /// Entry stamped with the current local time.
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            recorded_at: Local::now(),
        }
    }
}

/// Capabilities shared by every integration backend.
#[allow(async_fn_in_trait)]
pub trait Integration {
    /// Display name, e.g. `"Clockify"`.
    fn name(&self) -> &'static str;

    fn kind(&self) -> IntegrationKind;

    /// Connect the user's account.
    async fn authenticate(&mut self) -> anyhow::Result<()>;

    /// Record `entry` with this backend.
    async fn log(&self, entry: &LogEntry) -> anyhow::Result<()>;

    /// Forget the user's account.  Backends without session state skip this.
    async fn logout(&mut self) -> anyhow::Result<()> {
        tracing::info!(integration = self.name(), "nothing to log out of");
        Ok(())
    }
}

/// Enum dispatch over the built-in backends.
#[derive(Debug)]
pub enum Backend {
    JiraBoard(jira::JiraBoard),
    JiraClock(jira::JiraClock),
    Clockify(clockify::Clockify),
}

impl Integration for Backend {
    fn name(&self) -> &'static str {
        match self {
            Backend::JiraBoard(b) => b.name(),
            Backend::JiraClock(b) => b.name(),
            Backend::Clockify(b) => b.name(),
        }
    }

    fn kind(&self) -> IntegrationKind {
        match self {
            Backend::JiraBoard(b) => b.kind(),
            Backend::JiraClock(b) => b.kind(),
            Backend::Clockify(b) => b.kind(),
        }
    }

    async fn authenticate(&mut self) -> anyhow::Result<()> {
        match self {
            Backend::JiraBoard(b) => b.authenticate().await,
            Backend::JiraClock(b) => b.authenticate().await,
            Backend::Clockify(b) => b.authenticate().await,
        }
    }

    async fn log(&self, entry: &LogEntry) -> anyhow::Result<()> {
        match self {
            Backend::JiraBoard(b) => b.log(entry).await,
            Backend::JiraClock(b) => b.log(entry).await,
            Backend::Clockify(b) => b.log(entry).await,
        }
    }

    async fn logout(&mut self) -> anyhow::Result<()> {
        match self {
            Backend::JiraBoard(b) => b.logout().await,
            Backend::JiraClock(b) => b.logout().await,
            Backend::Clockify(b) => b.logout().await,
        }
    }
}
