//! Fetch capabilities
//!
//! The [`Fetcher`] trait is the seam between the orchestrator and whatever
//! actually talks to a mail server. The orchestrator only ever calls the two
//! trait methods; connection handling, protocol work and any internal
//! parallelism belong to the implementation.
//!
//! ## Implementations
//!
//! - [`MailboxFetcher`]: fans a fetch out over the mailboxes reported by a
//!   protocol-specific [`MailboxSource`], sequentially or with bounded
//!   concurrency
//!
//! Any `Arc<F>` or `Box<F>` of a fetcher is itself a fetcher, so a single
//! capability can be shared between several orchestrators.

mod mailbox;
mod traits;

pub use mailbox::{MailboxFetcher, MailboxSource};
pub use traits::Fetcher;
