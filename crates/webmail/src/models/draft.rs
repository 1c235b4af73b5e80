//! Draft model for locally persisted, unsent messages
//!
//! Drafts are owned entirely by the client and never leave local storage.
//! Recipients stay free text until the compose form is submitted.

use serde::{Deserialize, Serialize};

/// Unique identifier for a draft, generated from its creation time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(pub String);

impl DraftId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DraftId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DraftId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A locally saved draft of an unsent message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub id: DraftId,
    /// Free-text recipient list, unvalidated until submit
    pub recipients: String,
    pub subject: String,
    pub body: String,
    /// Local display string recorded at save time
    pub timestamp: String,
}
