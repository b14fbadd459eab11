//! # mail-fetcher
//!
//! Orchestration layer for mail retrieval.
//!
//! ## Design Philosophy
//!
//! mail-fetcher is designed to be:
//! - **Protocol-agnostic** - The actual server work lives behind the [`Fetcher`] trait
//! - **Policy-driven** - [`FetcherConfig`] picks sequential or parallel retrieval
//! - **Observable** - Lifecycle [hooks](hooks) run before a fetch, after it and after a failure
//! - **Transparent** - Errors reach the caller exactly as the fetcher produced them
//!
//! ## Quick Start
//!
//! ```no_run
//! use async_trait::async_trait;
//! use mail_fetcher::hooks::TracingHooks;
//! use mail_fetcher::{
//!     ExecutionMode, FetcherConfig, MailFetcher, MailMessage, MailServerConnection,
//!     MailboxFetcher, MailboxSource, Result,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! struct MyImapBackend;
//!
//! #[async_trait]
//! impl MailboxSource for MyImapBackend {
//!     async fn list_mailboxes(
//!         &self,
//!         _connection: &MailServerConnection,
//!         _cancel: &CancellationToken,
//!     ) -> Result<Vec<String>> {
//!         Ok(vec!["INBOX".to_string(), "Archive".to_string()])
//!     }
//!
//!     async fn fetch_mailbox(
//!         &self,
//!         _connection: &MailServerConnection,
//!         _mailbox: &str,
//!         _cancel: &CancellationToken,
//!     ) -> Result<Vec<MailMessage>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = MailFetcher::with_hooks(
//!         MailboxFetcher::new(MyImapBackend),
//!         FetcherConfig::with_mode(ExecutionMode::ConditionalParallel),
//!         TracingHooks,
//!     );
//!
//!     let connection = MailServerConnection {
//!         username: Some("user".to_string()),
//!         password: Some("pass".to_string()),
//!         ..MailServerConnection::new("imap.example.com", 993)
//!     };
//!
//!     let messages = orchestrator
//!         .invoke(&connection, &CancellationToken::new())
//!         .await?;
//!     println!("Fetched {} messages", messages.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Fetch capabilities
pub mod fetcher;
/// Lifecycle hooks
pub mod hooks;
/// Fetch orchestrator
pub mod orchestrator;
/// Core types and events
pub mod types;

// Re-export commonly used types
pub use config::{ExecutionMode, FetcherConfig};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, MailboxFetcher, MailboxSource};
pub use hooks::{EventHooks, FetchHooks, NoOpHooks, TracingHooks};
pub use orchestrator::MailFetcher;
pub use types::{FetchEvent, MailMessage, MailProtocol, MailServerConnection};
