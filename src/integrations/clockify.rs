//! Clockify time tracker.

use super::{Integration, IntegrationKind, LogEntry};

#[derive(Debug, Default)]
pub struct Clockify {
    authenticated: bool,
}

impl Clockify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl Integration for Clockify {
    fn name(&self) -> &'static str {
        "Clockify"
    }

    fn kind(&self) -> IntegrationKind {
        IntegrationKind::Clock
    }

    async fn authenticate(&mut self) -> anyhow::Result<()> {
        tracing::info!("clockify auth");
        println!("Clockify Auth");
        self.authenticated = true;
        Ok(())
    }

    async fn log(&self, entry: &LogEntry) -> anyhow::Result<()> {
        tracing::info!(message = %entry.message, authenticated = self.authenticated, "clockify log");
        println!(
            "Clockify log [{}] {}",
            entry.recorded_at.format("%Y-%m-%d %H:%M"),
            entry.message
        );
        Ok(())
    }

    async fn logout(&mut self) -> anyhow::Result<()> {
        tracing::info!("logging out, dropping clockify session");
        println!("Clockify Logout");
        self.authenticated = false;
        Ok(())
    }
}
