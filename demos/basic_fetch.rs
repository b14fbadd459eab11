//! Basic fetch example
//!
//! This example demonstrates the core functionality of mail-fetcher:
//! - Plugging a mailbox backend into `MailboxFetcher`
//! - Choosing an execution mode
//! - Subscribing to lifecycle events
//! - Cancelling a fetch from another task

use async_trait::async_trait;
use mail_fetcher::{
    EventHooks, ExecutionMode, FetchEvent, FetcherConfig, MailFetcher, MailMessage,
    MailServerConnection, MailboxFetcher, MailboxSource, Result, TracingHooks,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Pretends to be an IMAP server with a few folders
struct DemoBackend;

#[async_trait]
impl MailboxSource for DemoBackend {
    async fn list_mailboxes(
        &self,
        _connection: &MailServerConnection,
        _cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        Ok(["INBOX", "Work", "Family", "Archive"]
            .iter()
            .map(|m| m.to_string())
            .collect())
    }

    async fn fetch_mailbox(
        &self,
        _connection: &MailServerConnection,
        mailbox: &str,
        _cancel: &CancellationToken,
    ) -> Result<Vec<MailMessage>> {
        // Simulate network latency
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok((1..=3)
            .map(|uid| MailMessage {
                uid: Some(uid),
                mailbox: Some(mailbox.to_string()),
                subject: Some(format!("{mailbox} message {uid}")),
                ..Default::default()
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    let connection = MailServerConnection {
        username: Some("your_username".to_string()),
        password: Some("your_password".to_string()),
        ..MailServerConnection::new("imap.example.com", 993)
    };

    let config = FetcherConfig {
        execution_mode: ExecutionMode::ConditionalParallel,
        max_degree_of_parallelism: 2,
        parallel_threshold: 3,
    };

    let events = EventHooks::default();
    let mut rx = events.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            match event {
                FetchEvent::Fetching { fetcher } => println!("→ {fetcher}: fetching"),
                FetchEvent::Fetched { fetcher } => println!("✓ {fetcher}: fetched"),
                FetchEvent::FetchFailed { fetcher, cancelled } => {
                    println!("✗ {fetcher}: failed (cancelled: {cancelled})")
                }
            }
        }
    });

    let orchestrator = MailFetcher::with_hooks(
        MailboxFetcher::new(DemoBackend),
        config,
        (TracingHooks, events),
    );

    let cancel = CancellationToken::new();
    let messages = orchestrator.invoke(&connection, &cancel).await?;
    for message in &messages {
        println!(
            "  [{}] {}",
            message.mailbox.as_deref().unwrap_or("?"),
            message.subject.as_deref().unwrap_or("(no subject)")
        );
    }

    // Second run, cancelled half-way through
    let canceller = cancel.child_token();
    let trigger = canceller.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });
    match orchestrator.invoke(&connection, &canceller).await {
        Ok(messages) => println!("Fetched {} messages", messages.len()),
        Err(e) => println!("Second fetch stopped: {e}"),
    }

    // Give the event printer a moment to drain
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(())
}
