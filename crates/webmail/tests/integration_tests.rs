//! Integration tests for the webmail crate
//!
//! These tests drive whole user flows through the controller: composing,
//! saving and editing drafts, and rendering the two panels. Network-backed
//! operations are exercised against a closed local port, which makes every
//! HTTP call fail fast the way an unreachable backend would.

use std::sync::Arc;

use tempfile::TempDir;
use webmail::{
    ComposeForm, Control, DraftStore, Email, EmailId, InMemoryLocalStore, Mailbox, MailApiClient,
    NoticeLevel, Panel, SqliteLocalStore, SubmitOutcome, ViewController, compose_panel,
    drafts_page, email_detail, html_escape, mailbox_page, reply_subject, validate_compose,
};

/// Controller over in-memory storage and an unreachable backend
fn offline_controller() -> ViewController {
    let client = MailApiClient::new("http://127.0.0.1:1").unwrap();
    ViewController::new(client, Arc::new(InMemoryLocalStore::new()))
}

fn make_email(id: i64, subject: &str, body: &str) -> Email {
    Email {
        id: EmailId::new(id),
        sender: "alice@example.com".to_string(),
        recipients: vec!["me@example.com".to_string()],
        subject: subject.to_string(),
        body: body.to_string(),
        timestamp: "Aug 06 2026, 10:30 AM".to_string(),
        read: false,
        archived: false,
    }
}

#[test]
fn test_draft_lifecycle_through_controller() {
    let mut controller = offline_controller();

    // Start a message, save it, and leave the panel
    controller.compose();
    assert_eq!(controller.view_state().panel, Panel::Compose);
    assert!(controller.compose_form().is_empty());

    set_form(&mut controller, "bob@example.com", "Plans", "Dinner on Friday?");
    let draft = controller.save_draft().expect("draft should save");

    // The drafts listing shows it
    let html = controller.load_drafts();
    assert!(html.contains("Plans"));
    assert!(html.contains("To: bob@example.com"));

    // Edit it back into the compose panel
    controller.edit_draft(&draft.id).expect("draft should load");
    assert_eq!(controller.compose_form().subject, "Plans");
    assert_eq!(controller.compose_form().draft_id, Some(draft.id.clone()));

    // Resaving appends a second record; the original remains
    controller.save_draft().expect("resave should append");
    let html = controller.load_drafts();
    assert_eq!(html.matches("draft-item").count(), 2);
}

#[test]
fn test_empty_drafts_scenario() {
    let mut controller = offline_controller();
    let html = controller.load_drafts();
    assert!(html.contains("No drafts available"));
    assert!(!html.contains("draft-item"));
}

#[test]
fn test_drafts_survive_restart_on_sqlite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local.db");

    {
        let store = Arc::new(SqliteLocalStore::new(&path).unwrap());
        let drafts = DraftStore::new(store);
        drafts
            .save_draft("bob@example.com", "Persisted", "still here")
            .unwrap();
    }

    let store = Arc::new(SqliteLocalStore::new(&path).unwrap());
    let drafts = DraftStore::new(store);
    let list = drafts.get_drafts();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].subject, "Persisted");
}

#[test]
fn test_reply_then_submit_validation_flow() {
    let mut controller = offline_controller();
    let email = make_email(3, "Hello", "First line\nSecond line");

    let html = controller.reply(&email);
    assert!(html.contains("Reply to Email"));
    assert_eq!(controller.compose_form().subject, "Re: Hello");
    assert!(controller.compose_form().body.contains("-----Original Message-----"));

    // Blank out the recipients; validation must abort before any network call
    set_form(&mut controller, "", "Re: Hello", "Sounds good");
    let mut send = Control::send_button();
    assert_eq!(controller.submit_compose(&mut send), SubmitOutcome::Invalid);
    assert_eq!(
        controller.compose_form().errors,
        vec!["Recipients field is required"]
    );

    // The inline list renders with the form
    let html = compose_panel(controller.compose_form());
    assert!(html.contains("Please correct the following errors"));
    assert!(html.contains("<li>Recipients field is required</li>"));
}

#[test]
fn test_send_failure_keeps_draft_and_restores_control() {
    let mut controller = offline_controller();

    controller.compose();
    set_form(&mut controller, "bob@example.com", "Plans", "Friday?");
    let draft = controller.save_draft().unwrap();
    controller.edit_draft(&draft.id).unwrap();

    let mut send = Control::send_button();
    let outcome = controller.submit_compose(&mut send);

    // Unreachable backend: the action fails, the control comes back, and
    // the tracked draft is not deleted
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!send.disabled);
    assert_eq!(send.label, "Send");
    assert_eq!(controller.compose_form().draft_id, Some(draft.id.clone()));

    let html = controller.load_drafts();
    assert!(html.contains("Plans"));

    let errors: Vec<_> = controller
        .notices
        .visible()
        .iter()
        .filter(|n| n.level == NoticeLevel::Error)
        .collect();
    assert!(!errors.is_empty());
}

#[test]
fn test_mailbox_rendering_end_to_end() {
    let emails = vec![
        make_email(2, "Newest", "body"),
        make_email(1, "<b>Oldest</b>", "body"),
    ];

    let html = mailbox_page(Mailbox::Inbox, &emails);

    // Backend order preserved, markup neutralized
    let first = html.find("Newest").unwrap();
    let second = html.find("&lt;b&gt;Oldest&lt;/b&gt;").unwrap();
    assert!(first < second);
    assert!(!html.contains("<b>Oldest</b>"));

    // Unread rows are marked and carry both toggles
    assert!(html.contains("email-item unread"));
    assert!(html.contains("toggle-read"));
    assert!(html.contains("toggle-archive"));

    assert!(mailbox_page(Mailbox::Sent, &[]).contains("No emails to display"));
}

#[test]
fn test_escaping_is_inert_everywhere() {
    let escaped = html_escape("<script>alert(1)</script>");
    assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");

    let mut evil = make_email(1, "<script>alert(1)</script>", "<script>alert(2)</script>");
    evil.sender = "<script>alert(3)</script>@example.com".to_string();

    for html in [
        mailbox_page(Mailbox::Inbox, &[evil.clone()]),
        email_detail(&evil),
    ] {
        assert!(!html.contains("<script>"));
    }
}

#[test]
fn test_reply_subject_properties() {
    assert_eq!(reply_subject("Hello"), "Re: Hello");
    assert_eq!(reply_subject("Re: Hello"), "Re: Hello");
}

#[test]
fn test_validation_properties() {
    assert!(validate_compose("bob@example.com", "Hi", "Body").is_empty());

    let errors = validate_compose("bad-address", "Hi", "Body");
    assert!(errors.iter().any(|e| e.contains("bad-address")));

    let errors = validate_compose("", "", "");
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_drafts_page_direct_render() {
    let html = drafts_page(&[]);
    assert!(html.contains("No drafts available"));
}

#[test]
fn test_compose_form_defaults() {
    let form = ComposeForm::new();
    assert!(form.is_empty());
    assert_eq!(form.heading(), "Compose New Email");
}

/// Set the compose form fields the way the shell would on input events
fn set_form(controller: &mut ViewController, recipients: &str, subject: &str, body: &str) {
    let form = controller.compose_form_mut();
    form.recipients = recipients.to_string();
    form.subject = subject.to_string();
    form.body = body.to_string();
}
