//! Command handlers.
//!
//! Each handler asks the user to choose through a [`Prompt`], looks the answer
//! up in the [`Registry`], and drives the chosen [`Integration`].  A cancelled
//! prompt ends the command quietly with `Ok(None)`.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::app::session;
use crate::config::{Action, AppConfig};
use crate::integrations::{Backend, Integration, IntegrationKind, LogEntry, Registry};

pub const INTEGRATION_TYPE_TITLE: &str = "Select the Integration Type:";

/// Asks the user to pick one of `options`.  `None` means they backed out.
#[allow(async_fn_in_trait)]
pub trait Prompt {
    async fn choose(&mut self, title: &str, options: Vec<String>) -> Result<Option<usize>>;
}

/// Interactive selector on the controlling terminal.
pub struct TerminalPrompt {
    config: AppConfig,
}

impl TerminalPrompt {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl Prompt for TerminalPrompt {
    async fn choose(&mut self, title: &str, options: Vec<String>) -> Result<Option<usize>> {
        let title = title.to_string();
        let config = self.config.clone();
        // Terminal reads block; keep them off the async workers.
        let outcome = tokio::task::spawn_blocking(move || session::select(&title, options, &config))
            .await
            .context("selector task panicked")??;
        Ok(outcome.selected_index())
    }
}

/// `auth login`: pick a kind and backend, then authenticate with it.
pub async fn login<P: Prompt>(prompt: &mut P, registry: &Registry) -> Result<Option<Backend>> {
    let Some(mut backend) = choose_backend(prompt, registry).await? else {
        return Ok(None);
    };
    tracing::info!(integration = backend.name(), kind = %backend.kind(), "authenticating");
    backend
        .authenticate()
        .await
        .with_context(|| format!("authenticating with {}", backend.name()))?;
    Ok(Some(backend))
}

/// `auth logout`: pick a kind and backend, then drop its session.
pub async fn logout<P: Prompt>(prompt: &mut P, registry: &Registry) -> Result<Option<Backend>> {
    let Some(mut backend) = choose_backend(prompt, registry).await? else {
        return Ok(None);
    };
    tracing::info!(integration = backend.name(), kind = %backend.kind(), "logging out");
    backend
        .logout()
        .await
        .with_context(|| format!("logging out of {}", backend.name()))?;
    Ok(Some(backend))
}

/// `log <message>`: pick a clock and record the message against it.
pub async fn log<P: Prompt>(
    prompt: &mut P,
    registry: &Registry,
    message: &str,
) -> Result<Option<LogEntry>> {
    let message = message.trim();
    if message.is_empty() {
        bail!("refusing to log an empty message");
    }
    let Some(backend) = choose_provider(prompt, registry, IntegrationKind::Clock).await? else {
        return Ok(None);
    };
    let entry = LogEntry::now(message);
    backend
        .log(&entry)
        .await
        .with_context(|| format!("logging to {}", backend.name()))?;
    Ok(Some(entry))
}

/// `config`: print the config path and the bindings in effect, optionally
/// writing the defaults first.
pub fn config(path: &Path, init: bool) -> Result<()> {
    if init {
        if path.exists() {
            bail!("{} already exists; remove it first", path.display());
        }
        AppConfig::default().save(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
    }
    let loaded = AppConfig::load(path)?;
    println!("{}", path.display());
    for &action in Action::ALL {
        println!("  {:<10} {}", action.label(), loaded.display_bindings(action));
    }
    Ok(())
}

async fn choose_backend<P: Prompt>(prompt: &mut P, registry: &Registry) -> Result<Option<Backend>> {
    let kinds = registry.kinds();
    let labels = kinds.iter().map(|k| k.label().to_string()).collect();
    let Some(i) = prompt.choose(INTEGRATION_TYPE_TITLE, labels).await? else {
        return Ok(None);
    };
    let kind = *kinds
        .get(i)
        .ok_or_else(|| anyhow!("selector returned out-of-range index {i}"))?;
    choose_provider(prompt, registry, kind).await
}

/// Pick a backend of `kind`; a lone backend is chosen without asking.
async fn choose_provider<P: Prompt>(
    prompt: &mut P,
    registry: &Registry,
    kind: IntegrationKind,
) -> Result<Option<Backend>> {
    let providers = registry.providers(kind);
    let name = match providers.as_slice() {
        [] => bail!("no {kind} integrations are available"),
        [only] => *only,
        _ => {
            let options = providers.iter().map(|p| p.to_string()).collect();
            let Some(i) = prompt.choose(&format!("Select the {kind}:"), options).await? else {
                return Ok(None);
            };
            *providers
                .get(i)
                .ok_or_else(|| anyhow!("selector returned out-of-range index {i}"))?
        }
    };
    registry
        .build(kind, name)
        .map(Some)
        .ok_or_else(|| anyhow!("{kind} integration {name:?} is not registered"))
}
