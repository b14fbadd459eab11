//! The fetch orchestrator
//!
//! [`MailFetcher`] wraps a [`Fetcher`] with an execution policy and a set of
//! lifecycle hooks. It holds no mutable state; every call to
//! [`MailFetcher::invoke`] is independent.

use crate::config::{ExecutionMode, FetcherConfig};
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::hooks::{FetchHooks, NoOpHooks};
use crate::types::{MailMessage, MailServerConnection};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Drives one fetch per [`invoke`](Self::invoke) call
///
/// The configuration's execution mode picks the fetcher method:
///
/// | Mode | Call |
/// |---|---|
/// | `None` | [`Fetcher::fetch`] |
/// | `ConditionalParallel`, `ForceParallel` | [`Fetcher::fetch_parallel`] with this orchestrator's configuration |
/// | `Unrecognized` | nothing, the result is empty |
///
/// `MailFetcher` never spawns tasks, checks the cancellation token or
/// imposes a timeout; concurrency and cancellation handling belong to the
/// fetcher. Concurrent `invoke` calls on one instance are allowed and are
/// as safe as the fetcher and hooks are.
pub struct MailFetcher<F, H = NoOpHooks> {
    /// Fetch capability
    fetcher: F,
    /// Execution policy (fixed for the lifetime of the orchestrator)
    config: FetcherConfig,
    /// Lifecycle hooks
    hooks: H,
}

impl<F: Fetcher> MailFetcher<F> {
    /// Orchestrator with the default configuration (sequential fetch) and no hooks
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, FetcherConfig::default())
    }

    /// Orchestrator with the given configuration and no hooks
    pub fn with_config(fetcher: F, config: FetcherConfig) -> Self {
        Self::with_hooks(fetcher, config, NoOpHooks)
    }
}

impl<F, H> MailFetcher<F, H>
where
    F: Fetcher,
    H: FetchHooks<F>,
{
    /// Orchestrator with the given configuration and hooks
    pub fn with_hooks(fetcher: F, config: FetcherConfig, hooks: H) -> Self {
        Self {
            fetcher,
            config,
            hooks,
        }
    }

    /// The wrapped fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The execution policy
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// The lifecycle hooks
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Run one fetch
    ///
    /// 1. `on_fetching` runs; its error is returned as-is.
    /// 2. The fetcher is called according to the execution mode.
    /// 3. If the fetcher fails, `on_fetch_failed` runs and the fetcher's error
    ///    is returned unchanged.
    /// 4. Otherwise `on_fetched` runs and the messages are returned.
    ///
    /// `connection` and `cancel` are handed to the fetcher and to every hook
    /// exactly as received.
    ///
    /// If `on_fetch_failed` itself returns an error, that error is logged at
    /// `error` level and dropped; the caller still gets the fetcher's error.
    /// A failing failure hook therefore never supersedes the fetch error; to
    /// surface hook failures, observe them inside the hook itself.
    ///
    /// # Errors
    ///
    /// Whatever the fetcher, `on_fetching` or `on_fetched` returned.
    pub async fn invoke(
        &self,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        self.hooks.on_fetching(&self.fetcher, cancel).await?;

        let mode = self.config.execution_mode;
        let fetched = if mode == ExecutionMode::None {
            self.fetcher.fetch(connection, cancel).await
        } else if mode.is_parallel() {
            self.fetcher
                .fetch_parallel(&self.config, connection, cancel)
                .await
        } else {
            debug!(
                fetcher = self.fetcher.name(),
                mode = ?mode,
                "Unrecognized execution mode, nothing fetched"
            );
            Ok(Vec::new())
        };

        let messages = match fetched {
            Ok(messages) => messages,
            Err(e) => {
                if let Err(hook_error) = self.hooks.on_fetch_failed(&self.fetcher, cancel).await {
                    error!(
                        fetcher = self.fetcher.name(),
                        error = %e,
                        hook_error = %hook_error,
                        "Fetch-failed hook errored, returning the original fetch error"
                    );
                }
                return Err(e);
            }
        };

        self.hooks.on_fetched(&self.fetcher, cancel).await?;

        Ok(messages)
    }
}
