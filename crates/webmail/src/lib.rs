//! Webmail crate - Front-end core for a REST-backed mail client
//!
//! This crate provides shell-independent webmail functionality including:
//! - Domain models (Email, Draft, Mailbox)
//! - Backend API client with CSRF token handling
//! - Local storage abstraction and the draft store
//! - Compose-form validation
//! - HTML rendering components for the list and compose panels
//! - Transient notification queue
//! - The view controller tying the pieces together
//!
//! This crate has zero UI-toolkit dependencies; the hosting page shell owns
//! presentation and event dispatch.

pub mod api;
pub mod config;
pub mod controller;
pub mod drafts;
pub mod models;
pub mod notify;
pub mod render;
pub mod storage;
pub mod validate;

pub use api::{ApiError, MailApiClient, cookie_value, csrf_token_from_cookies};
pub use config::ClientConfig;
pub use controller::{
    ComposeForm, Control, Panel, SEND_REDIRECT_DELAY, SubmitOutcome, ViewController, ViewState,
    reply_subject,
};
pub use drafts::DraftStore;
pub use models::{Draft, DraftId, Email, EmailId, Mailbox};
pub use notify::{Notification, NotificationQueue, NoticeLevel};
pub use render::{
    compose_panel, control_button, drafts_page, email_detail, error_banner, format_body,
    html_escape, mailbox_page,
};
pub use storage::{InMemoryLocalStore, LocalStore, SqliteLocalStore};
pub use validate::{is_valid_address, validate_compose};
