//! Jira, usable both as an issue board and as a worklog clock.

use anyhow::bail;

use super::{Integration, IntegrationKind, LogEntry};

/// Jira issue board.
#[derive(Debug, Default)]
pub struct JiraBoard {
    authenticated: bool,
}

impl JiraBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl Integration for JiraBoard {
    fn name(&self) -> &'static str {
        "Jira"
    }

    fn kind(&self) -> IntegrationKind {
        IntegrationKind::Board
    }

    async fn authenticate(&mut self) -> anyhow::Result<()> {
        tracing::info!("jira board auth");
        println!("Jira Board Auth");
        self.authenticated = true;
        Ok(())
    }

    async fn log(&self, entry: &LogEntry) -> anyhow::Result<()> {
        bail!(
            "Jira boards don't record time; pick a clock to log {:?}",
            entry.message
        )
    }

    async fn logout(&mut self) -> anyhow::Result<()> {
        tracing::info!("logging out, dropping jira board session");
        println!("Jira Board Logout");
        self.authenticated = false;
        Ok(())
    }
}

/// Jira worklogs.
#[derive(Debug, Default)]
pub struct JiraClock;

impl JiraClock {
    pub fn new() -> Self {
        Self
    }
}

impl Integration for JiraClock {
    fn name(&self) -> &'static str {
        "Jira"
    }

    fn kind(&self) -> IntegrationKind {
        IntegrationKind::Clock
    }

    async fn authenticate(&mut self) -> anyhow::Result<()> {
        tracing::info!("jira clock auth");
        println!("Jira Clock Auth");
        Ok(())
    }

    async fn log(&self, entry: &LogEntry) -> anyhow::Result<()> {
        tracing::info!(message = %entry.message, "jira worklog");
        println!(
            "Jira log [{}] {}",
            entry.recorded_at.format("%Y-%m-%d %H:%M"),
            entry.message
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_board_auth_and_logout_toggle_session() {
        let mut board = JiraBoard::new();
        assert!(!board.is_authenticated());
        board.authenticate().await.unwrap();
        assert!(board.is_authenticated());
        board.logout().await.unwrap();
        assert!(!board.is_authenticated());
    }

    #[tokio::test]
    async fn test_board_refuses_to_log_time() {
        let board = JiraBoard::new();
        let err = board.log(&LogEntry::now("PROJ-3 review")).await.unwrap_err();
        assert!(err.to_string().contains("PROJ-3 review"));
    }

    #[tokio::test]
    async fn test_clock_logs_and_default_logout() {
        let mut clock = JiraClock::new();
        assert_eq!(clock.kind(), IntegrationKind::Clock);
        clock.log(&LogEntry::now("standup")).await.unwrap();
        clock.logout().await.unwrap();
    }
}
