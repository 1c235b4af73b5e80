//! Explicit view state for the two panels

use crate::models::Mailbox;

/// The two visible panels; at most one is shown at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Mailbox,
    Compose,
}

/// View state threaded through the controller's operations
///
/// Nothing here persists; it is recomputed on every navigation action.
/// `current_mailbox` remembers which collection the list panel last showed
/// so the detail view's back action can return to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub panel: Panel,
    pub current_mailbox: Mailbox,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            panel: Panel::Mailbox,
            current_mailbox: Mailbox::Inbox,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// The triggering element of an operation, modeled explicitly
///
/// Handlers receive their control instead of reaching for an ambient event
/// target. Disabling it for the duration of one in-flight request is the
/// only double-submission guard, and it is advisory: a second gesture routed
/// through another path can still race it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub disabled: bool,
    pub icon: &'static str,
    pub label: &'static str,
    pub title: &'static str,
}

impl Control {
    /// Control for flipping the read flag, icon-only
    pub fn read_toggle(read: bool) -> Self {
        Self {
            disabled: false,
            icon: if read { "envelope-open" } else { "envelope" },
            label: "",
            title: if read { "Mark as unread" } else { "Mark as read" },
        }
    }

    /// Control for flipping the archived flag
    pub fn archive_toggle(archived: bool) -> Self {
        Self {
            disabled: false,
            icon: if archived { "inbox" } else { "archive" },
            label: if archived { "Unarchive" } else { "Archive" },
            title: if archived { "Move to inbox" } else { "Archive" },
        }
    }

    /// The compose form's submit control
    pub fn send_button() -> Self {
        Self {
            disabled: false,
            icon: "paper-plane",
            label: "Send",
            title: "Send",
        }
    }

    pub fn disable(&mut self) {
        self.disabled = true;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    /// Flip to the presentation for the new read flag
    pub fn set_read_state(&mut self, read: bool) {
        let disabled = self.disabled;
        *self = Self::read_toggle(read);
        self.disabled = disabled;
    }

    /// Flip to the presentation for the new archived flag
    pub fn set_archive_state(&mut self, archived: bool) {
        let disabled = self.disabled;
        *self = Self::archive_toggle(archived);
        self.disabled = disabled;
    }

    /// Switch the send button between idle and in-flight presentation
    pub fn set_sending(&mut self, sending: bool) {
        self.icon = if sending { "spinner" } else { "paper-plane" };
        self.label = if sending { "Sending..." } else { "Send" };
    }
}
