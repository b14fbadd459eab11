//! Core types and events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mail access protocol spoken by the server
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailProtocol {
    /// IMAP (default)
    #[default]
    Imap,
    /// POP3
    Pop3,
}

/// Where to fetch mail from and how to log in
///
/// The orchestrator never looks inside this value; it is handed to the
/// fetcher by reference exactly as the caller supplied it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailServerConnection {
    /// Server hostname
    pub host: String,

    /// Server port (typically 993 for IMAPS, 995 for POP3S)
    pub port: u16,

    /// Use TLS (implicit TLS, not STARTTLS)
    pub tls: bool,

    /// Protocol spoken by the server
    #[serde(default)]
    pub protocol: MailProtocol,

    /// Username for authentication
    #[serde(default)]
    pub username: Option<String>,

    /// Password for authentication
    #[serde(default)]
    pub password: Option<String>,

    /// Restrict the fetch to a single mailbox (None = let the fetcher decide)
    #[serde(default)]
    pub mailbox: Option<String>,
}

impl MailServerConnection {
    /// TLS IMAP connection without credentials
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            tls: true,
            protocol: MailProtocol::default(),
            username: None,
            password: None,
            mailbox: None,
        }
    }
}

impl fmt::Debug for MailServerConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailServerConnection")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .field("protocol", &self.protocol)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("mailbox", &self.mailbox)
            .finish()
    }
}

/// A single retrieved mail item
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    /// Server-assigned UID, if the protocol has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<u32>,
    /// Message-ID header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Mailbox the message was fetched from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailbox: Option<String>,
    /// Subject header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// From header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// To recipients
    #[serde(default)]
    pub to: Vec<String>,
    /// Date header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Raw message bytes
    #[serde(default)]
    pub body: Vec<u8>,
}

impl MailMessage {
    /// Message with only a raw body
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }
}

/// Event emitted during the fetch lifecycle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FetchEvent {
    /// A fetch is about to start
    Fetching {
        /// Fetcher name
        fetcher: String,
    },

    /// A fetch completed successfully
    Fetched {
        /// Fetcher name
        fetcher: String,
    },

    /// A fetch failed; the error is returned to the caller separately
    FetchFailed {
        /// Fetcher name
        fetcher: String,
        /// Whether the cancellation token had fired when the failure was reported
        cancelled: bool,
    },
}
