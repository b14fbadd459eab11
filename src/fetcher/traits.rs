//! The fetch capability trait

use crate::config::FetcherConfig;
use crate::types::{MailMessage, MailServerConnection};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Strategy that performs the actual mail retrieval
///
/// Implementations must return an empty `Vec` (not an error) when nothing
/// matched, and should report an observed cancellation as
/// [`Error::Cancelled`](crate::Error::Cancelled).
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use mail_fetcher::{Fetcher, FetcherConfig, MailMessage, MailServerConnection, Result};
/// use tokio_util::sync::CancellationToken;
///
/// struct Canned(Vec<MailMessage>);
///
/// #[async_trait]
/// impl Fetcher for Canned {
///     async fn fetch(
///         &self,
///         _connection: &MailServerConnection,
///         _cancel: &CancellationToken,
///     ) -> Result<Vec<MailMessage>> {
///         Ok(self.0.clone())
///     }
///
///     async fn fetch_parallel(
///         &self,
///         _config: &FetcherConfig,
///         connection: &MailServerConnection,
///         cancel: &CancellationToken,
///     ) -> Result<Vec<MailMessage>> {
///         self.fetch(connection, cancel).await
///     }
/// }
/// ```
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch messages sequentially
    ///
    /// # Errors
    ///
    /// Returns an implementation-defined error on connection or protocol
    /// failure, or when the cancellation token is observed.
    async fn fetch(
        &self,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> crate::Result<Vec<MailMessage>>;

    /// Fetch messages using the parallelism parameters in `config`
    ///
    /// `config.execution_mode` tells the implementation which parallel mode
    /// was requested; interpreting `ConditionalParallel` versus
    /// `ForceParallel` is entirely up to it.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`Fetcher::fetch`].
    async fn fetch_parallel(
        &self,
        config: &FetcherConfig,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> crate::Result<Vec<MailMessage>>;

    /// Human-readable name for logging and events
    fn name(&self) -> &'static str {
        "fetcher"
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch(
        &self,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> crate::Result<Vec<MailMessage>> {
        (**self).fetch(connection, cancel).await
    }

    async fn fetch_parallel(
        &self,
        config: &FetcherConfig,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> crate::Result<Vec<MailMessage>> {
        (**self).fetch_parallel(config, connection, cancel).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    async fn fetch(
        &self,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> crate::Result<Vec<MailMessage>> {
        (**self).fetch(connection, cancel).await
    }

    async fn fetch_parallel(
        &self,
        config: &FetcherConfig,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> crate::Result<Vec<MailMessage>> {
        (**self).fetch_parallel(config, connection, cancel).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
