//! Recording fakes for orchestrator tests
//!
//! [`RecordingFetcher`] and [`RecordingHooks`] append to a shared [`CallLog`]
//! so tests can assert the exact interleaving of hook and fetcher calls, and
//! remember the addresses of the references they were handed so tests can
//! check pass-through identity.

use async_trait::async_trait;
use mail_fetcher::{
    Error, FetchHooks, Fetcher, FetcherConfig, MailMessage, MailServerConnection, Result,
};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// One observed call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    OnFetching,
    Fetch,
    FetchParallel,
    OnFetched,
    OnFetchFailed,
}

/// Shared, ordered record of calls
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls().iter().filter(|c| **c == call).count()
    }
}

/// Address of a reference, for identity checks
pub fn addr<T>(value: &T) -> usize {
    value as *const T as usize
}

/// Build `n` distinguishable messages
pub fn messages(n: u32) -> Vec<MailMessage> {
    (0..n)
        .map(|i| MailMessage {
            uid: Some(i + 1),
            subject: Some(format!("message {}", i + 1)),
            ..MailMessage::new(format!("body {}", i + 1))
        })
        .collect()
}

/// Fetcher that records every call and returns a canned outcome
pub struct RecordingFetcher {
    log: CallLog,
    messages: Vec<MailMessage>,
    failure: Option<String>,
    /// Address of every connection received
    pub connections: Mutex<Vec<usize>>,
    /// Address of every cancellation token received
    pub tokens: Mutex<Vec<usize>>,
    /// Address of every configuration received by `fetch_parallel`
    pub configs: Mutex<Vec<usize>>,
}

impl RecordingFetcher {
    /// Fetcher that succeeds with `messages`
    pub fn returning(log: &CallLog, messages: Vec<MailMessage>) -> Self {
        Self {
            log: log.clone(),
            messages,
            failure: None,
            connections: Mutex::new(Vec::new()),
            tokens: Mutex::new(Vec::new()),
            configs: Mutex::new(Vec::new()),
        }
    }

    /// Fetcher that fails with `Error::Protocol(message)`
    pub fn failing(log: &CallLog, message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::returning(log, Vec::new())
        }
    }

    fn outcome(&self) -> Result<Vec<MailMessage>> {
        match &self.failure {
            Some(message) => Err(Error::Protocol(message.clone())),
            None => Ok(self.messages.clone()),
        }
    }

    fn record(&self, connection: &MailServerConnection, cancel: &CancellationToken) {
        self.connections.lock().unwrap().push(addr(connection));
        self.tokens.lock().unwrap().push(addr(cancel));
    }
}

#[async_trait]
impl Fetcher for RecordingFetcher {
    async fn fetch(
        &self,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        self.log.push(Call::Fetch);
        self.record(connection, cancel);
        self.outcome()
    }

    async fn fetch_parallel(
        &self,
        config: &FetcherConfig,
        connection: &MailServerConnection,
        cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        self.log.push(Call::FetchParallel);
        self.record(connection, cancel);
        self.configs.lock().unwrap().push(addr(config));
        self.outcome()
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Hooks that record every call, optionally failing one of them
pub struct RecordingHooks {
    log: CallLog,
    fail_on: Option<Call>,
    /// Address of every fetcher received
    pub fetchers: Mutex<Vec<usize>>,
    /// Address of every cancellation token received
    pub tokens: Mutex<Vec<usize>>,
}

impl RecordingHooks {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail_on: None,
            fetchers: Mutex::new(Vec::new()),
            tokens: Mutex::new(Vec::new()),
        }
    }

    /// Make the given hook return `Error::Hook`
    pub fn failing_on(log: &CallLog, call: Call) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::new(log)
        }
    }

    fn observe(
        &self,
        call: Call,
        fetcher: &RecordingFetcher,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.log.push(call);
        self.fetchers.lock().unwrap().push(addr(fetcher));
        self.tokens.lock().unwrap().push(addr(cancel));
        if self.fail_on == Some(call) {
            return Err(Error::Hook(format!("{call:?} hook failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl FetchHooks<RecordingFetcher> for RecordingHooks {
    async fn on_fetching(
        &self,
        fetcher: &RecordingFetcher,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.observe(Call::OnFetching, fetcher, cancel)
    }

    async fn on_fetched(
        &self,
        fetcher: &RecordingFetcher,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.observe(Call::OnFetched, fetcher, cancel)
    }

    async fn on_fetch_failed(
        &self,
        fetcher: &RecordingFetcher,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.observe(Call::OnFetchFailed, fetcher, cancel)
    }
}
