//! Lifecycle events over a broadcast channel

use super::FetchHooks;
use crate::fetcher::Fetcher;
use crate::types::FetchEvent;
use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

/// Hook set that publishes a [`FetchEvent`] for every lifecycle transition
///
/// Any number of subscribers may listen. Publishing with no subscribers is
/// not an error, and a lagging subscriber only loses its own oldest events.
///
/// # Examples
///
/// ```
/// use mail_fetcher::hooks::EventHooks;
///
/// # #[tokio::main]
/// # async fn main() {
/// let hooks = EventHooks::new(64);
/// let mut events = hooks.subscribe();
/// tokio::spawn(async move {
///     while let Ok(event) = events.recv().await {
///         println!("Event: {:?}", event);
///     }
/// });
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct EventHooks {
    event_tx: broadcast::Sender<FetchEvent>,
}

impl EventHooks {
    /// Create a hook set whose channel buffers up to `capacity` events per subscriber
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(capacity.max(1));
        Self { event_tx }
    }

    /// Subscribe to lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<FetchEvent> {
        self.event_tx.subscribe()
    }

    fn emit(&self, event: FetchEvent) {
        // No receivers is fine
        self.event_tx.send(event).ok();
    }
}

impl Default for EventHooks {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> FetchHooks<F> for EventHooks {
    async fn on_fetching(&self, fetcher: &F, _cancel: &CancellationToken) -> crate::Result<()> {
        self.emit(FetchEvent::Fetching {
            fetcher: fetcher.name().to_string(),
        });
        Ok(())
    }

    async fn on_fetched(&self, fetcher: &F, _cancel: &CancellationToken) -> crate::Result<()> {
        self.emit(FetchEvent::Fetched {
            fetcher: fetcher.name().to_string(),
        });
        Ok(())
    }

    async fn on_fetch_failed(&self, fetcher: &F, cancel: &CancellationToken) -> crate::Result<()> {
        self.emit(FetchEvent::FetchFailed {
            fetcher: fetcher.name().to_string(),
            cancelled: cancel.is_cancelled(),
        });
        Ok(())
    }
}
