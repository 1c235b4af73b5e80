//! Email model representing a backend message
//!
//! Emails are owned by the backend and read-only to the client; the wire
//! format maps 1:1 onto [`Email`].

use serde::{Deserialize, Serialize};

/// Unique identifier for an email (backend row id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub i64);

impl EmailId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EmailId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single email as served by the backend
///
/// `recipients` is ordered and non-empty for any sent or received message.
/// `timestamp` is the backend's display string; the client never parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub id: EmailId,
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    /// Plain text with embedded newlines
    pub body: String,
    pub timestamp: String,
    pub read: bool,
    pub archived: bool,
}

impl Email {
    /// Comma-separated recipient list for display
    pub fn recipients_display(&self) -> String {
        self.recipients.join(", ")
    }
}
