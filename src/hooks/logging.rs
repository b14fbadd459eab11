//! Lifecycle logging through `tracing`

use super::FetchHooks;
use crate::fetcher::Fetcher;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Hook set that logs every lifecycle transition
///
/// Fetching and fetched are logged at `info`, a failure at `warn`. The error
/// itself is not available to hooks; the caller receives it from
/// [`MailFetcher::invoke`](crate::MailFetcher::invoke).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHooks;

#[async_trait]
impl<F: Fetcher + ?Sized> FetchHooks<F> for TracingHooks {
    async fn on_fetching(&self, fetcher: &F, cancel: &CancellationToken) -> crate::Result<()> {
        info!(
            fetcher = fetcher.name(),
            cancelled = cancel.is_cancelled(),
            "Fetching mail"
        );
        Ok(())
    }

    async fn on_fetched(&self, fetcher: &F, _cancel: &CancellationToken) -> crate::Result<()> {
        info!(fetcher = fetcher.name(), "Fetched mail");
        Ok(())
    }

    async fn on_fetch_failed(&self, fetcher: &F, cancel: &CancellationToken) -> crate::Result<()> {
        warn!(
            fetcher = fetcher.name(),
            cancelled = cancel.is_cancelled(),
            "Mail fetch failed"
        );
        Ok(())
    }
}
