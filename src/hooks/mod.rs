//! Fetch lifecycle hooks
//!
//! [`FetchHooks`] is the extension point of [`MailFetcher`](crate::MailFetcher):
//! it is notified right before a fetch, right after a successful fetch and
//! right after a failed one. Every method defaults to a completed no-op, so an
//! implementation only overrides what it cares about.
//!
//! ## Implementations
//!
//! - [`NoOpHooks`]: the default, does nothing
//! - [`TracingHooks`]: logs each transition through `tracing`
//! - [`EventHooks`]: publishes [`FetchEvent`](crate::FetchEvent)s on a broadcast channel
//!
//! A pair `(A, B)` of hook sets is itself a hook set that runs `A` then `B`.
//!
//! ```
//! use mail_fetcher::hooks::{EventHooks, TracingHooks};
//!
//! let events = EventHooks::new(16);
//! let mut rx = events.subscribe();
//! let hooks = (TracingHooks, events);
//! # let _ = (&hooks, &mut rx);
//! ```

mod events;
mod logging;

pub use events::EventHooks;
pub use logging::TracingHooks;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Notifications around a single fetch
///
/// All methods receive the fetcher and the caller's cancellation token,
/// unchanged. Errors returned from `on_fetching` and `on_fetched` are passed
/// to the caller of [`MailFetcher::invoke`](crate::MailFetcher::invoke);
/// an error from `on_fetch_failed` is logged and the fetch error is returned
/// instead.
#[async_trait]
pub trait FetchHooks<F: ?Sized + Sync>: Send + Sync {
    /// Called right before the fetch
    async fn on_fetching(&self, _fetcher: &F, _cancel: &CancellationToken) -> crate::Result<()> {
        Ok(())
    }

    /// Called right after a successful fetch
    async fn on_fetched(&self, _fetcher: &F, _cancel: &CancellationToken) -> crate::Result<()> {
        Ok(())
    }

    /// Called right after the fetch failed, before the error is returned
    async fn on_fetch_failed(
        &self,
        _fetcher: &F,
        _cancel: &CancellationToken,
    ) -> crate::Result<()> {
        Ok(())
    }
}

/// Hook set that does nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpHooks;

impl<F: ?Sized + Sync> FetchHooks<F> for NoOpHooks {}

#[async_trait]
impl<F, A, B> FetchHooks<F> for (A, B)
where
    F: ?Sized + Sync,
    A: FetchHooks<F>,
    B: FetchHooks<F>,
{
    async fn on_fetching(&self, fetcher: &F, cancel: &CancellationToken) -> crate::Result<()> {
        self.0.on_fetching(fetcher, cancel).await?;
        self.1.on_fetching(fetcher, cancel).await
    }

    async fn on_fetched(&self, fetcher: &F, cancel: &CancellationToken) -> crate::Result<()> {
        self.0.on_fetched(fetcher, cancel).await?;
        self.1.on_fetched(fetcher, cancel).await
    }

    async fn on_fetch_failed(&self, fetcher: &F, cancel: &CancellationToken) -> crate::Result<()> {
        self.0.on_fetch_failed(fetcher, cancel).await?;
        self.1.on_fetch_failed(fetcher, cancel).await
    }
}
