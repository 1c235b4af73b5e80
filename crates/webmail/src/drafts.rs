//! Draft Store: local persistence for unsent messages
//!
//! A thin wrapper over [`LocalStore`]: the entire draft list is one JSON
//! array under a single storage key. Saving always appends a new record;
//! resaving an edited draft does not update in place (see DESIGN.md), and
//! the superseded record is deleted only when a tracked draft is
//! successfully sent.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use log::warn;
use std::sync::Arc;

use crate::models::{Draft, DraftId};
use crate::storage::LocalStore;

/// Storage key holding the whole draft list
const DRAFTS_KEY: &str = "emailDrafts";

/// Store for client-owned drafts
pub struct DraftStore {
    store: Arc<dyn LocalStore>,
}

impl DraftStore {
    /// Create a draft store over the given local storage area
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Append a new draft and persist the whole list
    ///
    /// Fields are stored as-is; recipients stay free text until submit.
    pub fn save_draft(&self, recipients: &str, subject: &str, body: &str) -> Result<Draft> {
        let mut drafts = self.get_drafts();

        let draft = Draft {
            id: fresh_id(&drafts),
            recipients: recipients.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            timestamp: Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        };

        drafts.push(draft.clone());
        self.persist(&drafts)?;
        Ok(draft)
    }

    /// The stored draft list, or empty when storage is absent or corrupt
    pub fn get_drafts(&self) -> Vec<Draft> {
        let raw = match self.store.get_item(DRAFTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read drafts from local storage: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(drafts) => drafts,
            Err(e) => {
                warn!("Discarding malformed draft list: {}", e);
                Vec::new()
            }
        }
    }

    /// Look up a single draft by id
    pub fn get_draft(&self, id: &DraftId) -> Option<Draft> {
        self.get_drafts().into_iter().find(|d| &d.id == id)
    }

    /// Remove the matching record and persist the remainder
    pub fn delete_draft(&self, id: &DraftId) -> Result<()> {
        let mut drafts = self.get_drafts();
        drafts.retain(|d| &d.id != id);
        self.persist(&drafts)
    }

    fn persist(&self, drafts: &[Draft]) -> Result<()> {
        let raw = serde_json::to_string(drafts).context("Failed to serialize drafts")?;
        self.store.set_item(DRAFTS_KEY, &raw)
    }
}

/// Creation-time id, bumped past any collision so a later delete removes
/// exactly one record
fn fresh_id(existing: &[Draft]) -> DraftId {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let id = DraftId::new(millis.to_string());
        if !existing.iter().any(|d| d.id == id) {
            return id;
        }
        millis += 1;
    }
}
