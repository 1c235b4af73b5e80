//! Mailbox model representing the backend's named collections

use serde::{Deserialize, Serialize};

/// A mailbox (named email collection) served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mailbox {
    Inbox,
    Sent,
    Archive,
}

impl Mailbox {
    /// The name used in the `/emails/{mailbox}` route
    pub fn as_str(&self) -> &'static str {
        match self {
            Mailbox::Inbox => "inbox",
            Mailbox::Sent => "sent",
            Mailbox::Archive => "archive",
        }
    }

    /// Human-readable heading for the list panel
    pub fn display_name(&self) -> &'static str {
        match self {
            Mailbox::Inbox => "Inbox",
            Mailbox::Sent => "Sent",
            Mailbox::Archive => "Archive",
        }
    }

    /// Parse a mailbox from its route name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "inbox" => Some(Mailbox::Inbox),
            "sent" => Some(Mailbox::Sent),
            "archive" => Some(Mailbox::Archive),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
