//! View controller for the mailbox and compose panels
//!
//! Coordinates the backend client, the local draft store, and the
//! notification queue. Operations run on the caller's thread, one network
//! call at a time; a failed call is terminal for that user action and is
//! surfaced through a transient notice.

use log::{debug, error, info, warn};
use std::cmp::Reverse;
use std::sync::Arc;
use std::time::Duration;

use super::compose::ComposeForm;
use super::view_state::{Control, Panel, ViewState};
use crate::api::wire::EmailPatch;
use crate::api::{ApiError, MailApiClient};
use crate::drafts::DraftStore;
use crate::models::{Draft, DraftId, Email, EmailId, Mailbox};
use crate::notify::NotificationQueue;
use crate::render;
use crate::storage::LocalStore;
use crate::validate::validate_compose;

/// Fixed delay between a successful send and navigation to Sent, giving the
/// success notice time to register
pub const SEND_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Result of a compose submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the inline error list is set and nothing was sent
    Invalid,
    /// The backend accepted the message; navigate to Sent after
    /// [`SEND_REDIRECT_DELAY`] via [`ViewController::complete_send_navigation`]
    Sent,
    /// The send failed; the control is restored for retry
    Failed,
}

/// Controller owning which panel is visible and every panel operation
pub struct ViewController {
    client: MailApiClient,
    drafts: DraftStore,
    pub notices: NotificationQueue,
    state: ViewState,
    compose: ComposeForm,
}

impl ViewController {
    /// Create a controller over a backend client and local storage area
    pub fn new(client: MailApiClient, store: Arc<dyn LocalStore>) -> Self {
        Self {
            client,
            drafts: DraftStore::new(store),
            notices: NotificationQueue::new(),
            state: ViewState::new(),
            compose: ComposeForm::new(),
        }
    }

    /// The current view state
    pub fn view_state(&self) -> ViewState {
        self.state
    }

    /// The compose form's current contents
    pub fn compose_form(&self) -> &ComposeForm {
        &self.compose
    }

    /// Mutable access for the shell to mirror field input into the form
    pub fn compose_form_mut(&mut self) -> &mut ComposeForm {
        &mut self.compose
    }

    /// Show the named mailbox in the list panel
    ///
    /// Rows keep the backend's order. An empty collection renders its
    /// placeholder; a fetch failure logs, pushes an error notice, and
    /// renders the dismissible error state instead.
    pub fn load_mailbox(&mut self, mailbox: Mailbox) -> String {
        self.state.panel = Panel::Mailbox;
        self.state.current_mailbox = mailbox;

        match self.client.list_mailbox(mailbox) {
            Ok(emails) => {
                debug!("Loaded {} emails from {}", emails.len(), mailbox);
                render::mailbox_page(mailbox, &emails)
            }
            Err(e) => {
                error!("Failed to load {}: {}", mailbox, e);
                self.notices.error(format!(
                    "Failed to load {}. Please try again.",
                    mailbox.display_name()
                ));
                render::error_banner("Error loading mailbox. Please try again.")
            }
        }
    }

    /// Show locally stored drafts in the list panel, newest first
    pub fn load_drafts(&mut self) -> String {
        self.state.panel = Panel::Mailbox;

        let mut drafts = self.drafts.get_drafts();
        // Ids are creation-time millis, so numeric order is age order
        drafts.sort_by_key(|d| Reverse(d.id.as_str().parse::<i64>().unwrap_or(0)));
        render::drafts_page(&drafts)
    }

    /// Open a blank compose panel
    pub fn compose(&mut self) -> String {
        self.compose.reset();
        self.state.panel = Panel::Compose;
        render::compose_panel(&self.compose)
    }

    /// Open the compose panel pre-filled as a reply
    pub fn reply(&mut self, email: &Email) -> String {
        self.compose.load_reply(email);
        self.state.panel = Panel::Compose;
        self.notices.info("Composing reply...");
        render::compose_panel(&self.compose)
    }

    /// Open the compose panel pre-filled from a stored draft
    ///
    /// Returns None when the draft no longer exists.
    pub fn edit_draft(&mut self, id: &DraftId) -> Option<String> {
        let draft = self.drafts.get_draft(id)?;
        self.compose.load_draft(&draft);
        self.state.panel = Panel::Compose;
        Some(render::compose_panel(&self.compose))
    }

    /// Show a single email's detail in the list panel
    ///
    /// An unread email is marked read via the side-effecting PUT; that
    /// write is fire-and-forget and only costs the unread marker if it
    /// fails.
    pub fn view_email(&mut self, id: EmailId) -> String {
        self.state.panel = Panel::Mailbox;

        match self.client.get_email(id) {
            Ok(email) => {
                if !email.read {
                    if let Err(e) = self.client.update_email(id, EmailPatch::read(true)) {
                        warn!("Failed to mark email {} as read: {}", id, e);
                    }
                }
                render::email_detail(&email)
            }
            Err(e) => {
                error!("Error loading email {}: {}", id, e);
                render::error_banner("Error loading email. Please try again.")
            }
        }
    }

    /// Return from the detail view to the mailbox it was opened from
    pub fn back(&mut self) -> String {
        self.load_mailbox(self.state.current_mailbox)
    }

    /// Flip an email's read flag
    ///
    /// Disables the triggering control for the duration of the request;
    /// success flips its presentation and returns the new flag, failure
    /// re-enables it for retry and pushes an error notice.
    pub fn toggle_read(&mut self, id: EmailId, read: bool, control: &mut Control) -> Option<bool> {
        control.disable();

        match self.client.update_email(id, EmailPatch::read(!read)) {
            Ok(()) => {
                control.set_read_state(!read);
                control.enable();
                Some(!read)
            }
            Err(e) => {
                error!("Failed to toggle read flag on {}: {}", id, e);
                self.notices.error("Failed to update email. Please try again.");
                control.enable();
                None
            }
        }
    }

    /// Flip an email's archived flag
    pub fn toggle_archive(
        &mut self,
        id: EmailId,
        archived: bool,
        control: &mut Control,
    ) -> Option<bool> {
        control.disable();

        match self.client.update_email(id, EmailPatch::archived(!archived)) {
            Ok(()) => {
                control.set_archive_state(!archived);
                control.enable();
                self.notices.success(if archived {
                    "Email unarchived successfully!"
                } else {
                    "Email archived successfully!"
                });
                Some(!archived)
            }
            Err(e) => {
                error!("Failed to toggle archived flag on {}: {}", id, e);
                self.notices.error(format!(
                    "Failed to {} email. Please try again.",
                    if archived { "unarchive" } else { "archive" }
                ));
                control.enable();
                None
            }
        }
    }

    /// Save the compose form as a new draft
    ///
    /// Refuses an all-empty form. Always appends; editing an existing draft
    /// and resaving creates an additional record (see DESIGN.md).
    pub fn save_draft(&mut self) -> Option<Draft> {
        if self.compose.is_empty() {
            self.notices.warning("Cannot save empty draft");
            return None;
        }

        match self.drafts.save_draft(
            &self.compose.recipients,
            &self.compose.subject,
            &self.compose.body,
        ) {
            Ok(draft) => {
                self.notices.success("Draft saved successfully!");
                Some(draft)
            }
            Err(e) => {
                error!("Failed to save draft: {}", e);
                self.notices.error("Failed to save draft. Please try again.");
                None
            }
        }
    }

    /// Delete a stored draft and re-render the drafts listing
    pub fn delete_draft(&mut self, id: &DraftId) -> String {
        if let Err(e) = self.drafts.delete_draft(id) {
            error!("Failed to delete draft {}: {}", id.as_str(), e);
            self.notices.error("Failed to delete draft. Please try again.");
        }
        self.load_drafts()
    }

    /// Validate and submit the compose form
    ///
    /// Validation failure sets the inline error list and aborts before any
    /// network call. On acceptance the tracked draft, if any, is deleted;
    /// the shell should navigate to Sent after [`SEND_REDIRECT_DELAY`].
    /// The submit control is restored on either outcome.
    pub fn submit_compose(&mut self, control: &mut Control) -> SubmitOutcome {
        let errors = validate_compose(
            &self.compose.recipients,
            &self.compose.subject,
            &self.compose.body,
        );
        if !errors.is_empty() {
            self.compose.errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.compose.errors.clear();

        control.disable();
        control.set_sending(true);

        let result = self.client.send_email(
            &self.compose.recipients,
            &self.compose.subject,
            &self.compose.body,
        );

        control.set_sending(false);
        control.enable();

        match result {
            Ok(()) => {
                info!("Email sent to {}", self.compose.recipients);
                self.notices.success("Email sent successfully!");

                if let Some(draft_id) = self.compose.draft_id.take() {
                    if let Err(e) = self.drafts.delete_draft(&draft_id) {
                        warn!("Failed to delete sent draft {}: {}", draft_id.as_str(), e);
                    }
                }

                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Error sending email: {}", e);
                let message = match e {
                    ApiError::Backend(message) => message,
                    _ => "Network error occurred. Please try again.".to_string(),
                };
                self.notices.error(message);
                SubmitOutcome::Failed
            }
        }
    }

    /// Finish the post-send navigation once [`SEND_REDIRECT_DELAY`] has
    /// passed
    pub fn complete_send_navigation(&mut self) -> String {
        self.load_mailbox(Mailbox::Sent)
    }
}
