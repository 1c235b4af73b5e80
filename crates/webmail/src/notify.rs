//! Transient notification queue for user feedback
//!
//! Non-intrusive notices shown after state-changing actions. At most
//! [`MAX_VISIBLE`] are presented at once; overflow waits in FIFO order and
//! is promoted as visible notices expire or are dismissed. Presentation is
//! the shell's job; this module owns only the queue and its timing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notices presented simultaneously
const MAX_VISIBLE: usize = 3;

/// Default time a notice stays on screen
const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Severity of a notice, driving its title and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl NoticeLevel {
    /// Default heading for the notice
    pub fn title(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "Success",
            NoticeLevel::Error => "Error",
            NoticeLevel::Info => "Info",
            NoticeLevel::Warning => "Warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✓",
            NoticeLevel::Error => "✗",
            NoticeLevel::Info => "ℹ",
            NoticeLevel::Warning => "⚠",
        }
    }
}

/// A single transient notice
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    duration: Duration,
    shown_at: Instant,
}

impl Notification {
    /// Whether this notice's display time has elapsed
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

/// Queue of transient notices
pub struct NotificationQueue {
    visible: Vec<Notification>,
    pending: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self {
            visible: Vec::new(),
            pending: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Enqueue a notice with the default duration
    pub fn show(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.show_with_duration(level, message, DEFAULT_DURATION)
    }

    /// Enqueue a notice with a custom duration
    pub fn show_with_duration(
        &mut self,
        level: NoticeLevel,
        message: impl Into<String>,
        duration: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let notice = Notification {
            id,
            level,
            message: message.into(),
            duration,
            shown_at: Instant::now(),
        };

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push(notice);
        } else {
            self.pending.push_back(notice);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeLevel::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeLevel::Info, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeLevel::Warning, message)
    }

    /// Dismiss a notice by id, visible or pending
    pub fn dismiss(&mut self, id: u64) {
        self.visible.retain(|n| n.id != id);
        self.pending.retain(|n| n.id != id);
        self.promote();
    }

    /// Drop expired notices and promote queued ones into the freed slots
    pub fn sweep(&mut self) {
        self.visible.retain(|n| !n.is_expired());
        self.promote();
    }

    /// Currently presented notices, oldest first
    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }

    pub fn has_notices(&self) -> bool {
        !self.visible.is_empty() || !self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.pending.clear();
    }

    fn promote(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notice) = self.pending.pop_front() else {
                break;
            };
            // Display time starts when the notice is actually shown
            notice.shown_at = Instant::now();
            self.visible.push(notice);
        }
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_levels() {
        let mut queue = NotificationQueue::new();
        assert!(!queue.has_notices());

        queue.success("Email sent successfully!");
        queue.error("Network error occurred. Please try again.");
        assert_eq!(queue.visible().len(), 2);
        assert_eq!(queue.visible()[0].level, NoticeLevel::Success);
        assert_eq!(queue.visible()[0].level.title(), "Success");
    }

    #[test]
    fn test_overflow_queues_fifo() {
        let mut queue = NotificationQueue::new();
        let first = queue.info("1");
        queue.info("2");
        queue.info("3");
        queue.info("4");

        assert_eq!(queue.visible().len(), 3);
        assert!(queue.has_notices());

        queue.dismiss(first);
        assert_eq!(queue.visible().len(), 3);
        assert_eq!(queue.visible()[2].message, "4");
    }

    #[test]
    fn test_sweep_expires_and_promotes() {
        let mut queue = NotificationQueue::new();
        queue.show_with_duration(NoticeLevel::Info, "short", Duration::ZERO);
        queue.info("keep-1");
        queue.info("keep-2");
        queue.info("waiting");

        queue.sweep();
        assert_eq!(queue.visible().len(), 3);
        let messages: Vec<_> = queue.visible().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["keep-1", "keep-2", "waiting"]);
    }

    #[test]
    fn test_dismiss_pending() {
        let mut queue = NotificationQueue::new();
        queue.info("1");
        queue.info("2");
        queue.info("3");
        let queued = queue.info("4");

        queue.dismiss(queued);
        queue.clear();
        assert!(!queue.has_notices());
    }
}
