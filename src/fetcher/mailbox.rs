//! Mailbox fan-out fetcher
//!
//! Splits a fetch into one unit of work per mailbox. The protocol work for a
//! single mailbox is delegated to a [`MailboxSource`]; this module only
//! decides how many mailboxes run at once.

use super::traits::Fetcher;
use crate::config::{ExecutionMode, FetcherConfig};
use crate::error::{Error, Result};
use crate::types::{MailMessage, MailServerConnection};
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Protocol backend that can enumerate and read mailboxes
#[async_trait]
pub trait MailboxSource: Send + Sync {
    /// List the mailboxes to fetch, in the order results should be returned
    async fn list_mailboxes(
        &self,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>>;

    /// Fetch every message of one mailbox
    async fn fetch_mailbox(
        &self,
        connection: &MailServerConnection,
        mailbox: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str {
        "mailbox"
    }
}

/// [`Fetcher`] that fetches mailboxes one by one or with bounded concurrency
///
/// `fetch_parallel` honours the requested mode:
///
/// - `ForceParallel` always runs up to `max_degree_of_parallelism` mailboxes
///   at once
/// - `ConditionalParallel` only does so when there are at least
///   `parallel_threshold` mailboxes, and is sequential otherwise
///
/// Results keep the mailbox listing order in every mode. The first failing
/// mailbox aborts the fetch and its error is returned as-is.
pub struct MailboxFetcher<S> {
    source: S,
}

impl<S: MailboxSource> MailboxFetcher<S> {
    /// Wrap a mailbox source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The wrapped source
    pub fn source(&self) -> &S {
        &self.source
    }

    async fn mailboxes(
        &self,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        if let Some(mailbox) = &connection.mailbox {
            return Ok(vec![mailbox.clone()]);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            result = self.source.list_mailboxes(connection, cancel) => result,
        }
    }

    async fn fetch_one(
        &self,
        connection: &MailServerConnection,
        mailbox: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        let messages = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            result = self.source.fetch_mailbox(connection, mailbox, cancel) => result?,
        };

        debug!(
            source = self.source.name(),
            mailbox,
            messages = messages.len(),
            "Fetched mailbox"
        );
        Ok(messages)
    }

    async fn fetch_sequential(
        &self,
        connection: &MailServerConnection,
        mailboxes: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        let mut messages = Vec::new();
        for mailbox in mailboxes {
            messages.extend(self.fetch_one(connection, mailbox, cancel).await?);
        }
        Ok(messages)
    }

    async fn fetch_concurrent(
        &self,
        connection: &MailServerConnection,
        mailboxes: &[String],
        concurrency: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        let fetches: Vec<_> = mailboxes
            .iter()
            .map(|mailbox| self.fetch_one(connection, mailbox, cancel))
            .collect();

        // buffered() (not buffer_unordered) keeps the listing order;
        // try_collect drops the in-flight fetches on the first error
        let batches: Vec<Vec<MailMessage>> = stream::iter(fetches)
            .buffered(concurrency)
            .try_collect()
            .await?;

        Ok(batches.into_iter().flatten().collect())
    }
}

#[async_trait]
impl<S: MailboxSource> Fetcher for MailboxFetcher<S> {
    async fn fetch(
        &self,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        let mailboxes = self.mailboxes(connection, cancel).await?;
        debug!(
            source = self.source.name(),
            mailboxes = mailboxes.len(),
            "Fetching mailboxes sequentially"
        );
        self.fetch_sequential(connection, &mailboxes, cancel).await
    }

    async fn fetch_parallel(
        &self,
        config: &FetcherConfig,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        let mailboxes = self.mailboxes(connection, cancel).await?;

        let parallel = match config.execution_mode {
            ExecutionMode::ForceParallel => true,
            ExecutionMode::ConditionalParallel => mailboxes.len() >= config.parallel_threshold,
            ExecutionMode::None | ExecutionMode::Unrecognized => false,
        };

        if !parallel {
            debug!(
                source = self.source.name(),
                mode = ?config.execution_mode,
                mailboxes = mailboxes.len(),
                threshold = config.parallel_threshold,
                "Falling back to sequential mailbox fetch"
            );
            return self.fetch_sequential(connection, &mailboxes, cancel).await;
        }

        let concurrency = config.max_degree_of_parallelism.max(1);
        debug!(
            source = self.source.name(),
            mode = ?config.execution_mode,
            mailboxes = mailboxes.len(),
            concurrency,
            "Fetching mailboxes in parallel"
        );
        self.fetch_concurrent(connection, &mailboxes, concurrency, cancel)
            .await
    }

    fn name(&self) -> &'static str {
        self.source.name()
    }
}
