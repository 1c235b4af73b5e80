//! Compose form state and pre-fill logic

use crate::models::{Draft, DraftId, Email, EmailId};

/// Subject prefix applied to replies at most once
const REPLY_PREFIX: &str = "Re: ";

/// The compose panel's field values and bookkeeping
///
/// `draft_id` ties the form to a stored draft so a successful send deletes
/// the original record; `reply_to` records which email the form is
/// answering.
#[derive(Debug, Clone, Default)]
pub struct ComposeForm {
    pub recipients: String,
    pub subject: String,
    pub body: String,
    pub draft_id: Option<DraftId>,
    pub reply_to: Option<EmailId>,
    /// Messages from the last failed validation pass
    pub errors: Vec<String>,
}

impl ComposeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field and any draft/reply tracking
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Heading for the compose panel
    pub fn heading(&self) -> &'static str {
        if self.reply_to.is_some() {
            "Reply to Email"
        } else {
            "Compose New Email"
        }
    }

    /// True when every field is blank
    pub fn is_empty(&self) -> bool {
        self.recipients.trim().is_empty()
            && self.subject.trim().is_empty()
            && self.body.trim().is_empty()
    }

    /// Pre-fill the form as a reply to the given email
    pub fn load_reply(&mut self, email: &Email) {
        self.reset();
        self.recipients = email.sender.clone();
        self.subject = reply_subject(&email.subject);
        self.body = quote_original(email);
        self.reply_to = Some(email.id);
    }

    /// Pre-fill the form from a stored draft, tracking its id
    pub fn load_draft(&mut self, draft: &Draft) {
        self.reset();
        self.recipients = draft.recipients.clone();
        self.subject = draft.subject.clone();
        self.body = draft.body.clone();
        self.draft_id = Some(draft.id.clone());
    }
}

/// Apply the reply prefix, never doubling it
pub fn reply_subject(subject: &str) -> String {
    if subject.starts_with(REPLY_PREFIX) {
        subject.to_string()
    } else {
        format!("{}{}", REPLY_PREFIX, subject)
    }
}

/// Quote the original message below room for the reply
fn quote_original(email: &Email) -> String {
    format!(
        "\n\n-----Original Message-----\nFrom: {}\nDate: {}\nSubject: {}\n\n{}",
        email.sender, email.timestamp, email.subject, email.body
    )
}
