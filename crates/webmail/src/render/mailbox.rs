//! List-panel rendering: mailbox rows and the local drafts listing

use super::{control_button, html_escape};
use crate::controller::Control;
use crate::models::{Draft, Email, Mailbox};

/// Render the list panel for a mailbox
///
/// One row per email, in the order the backend returned them (no
/// client-side sort). An empty collection renders a placeholder instead of
/// rows.
pub fn mailbox_page(mailbox: Mailbox, emails: &[Email]) -> String {
    let mut html = format!(
        r#"<h3>{}</h3>
<div class="email-list">
"#,
        mailbox.display_name()
    );

    if emails.is_empty() {
        html.push_str(r#"<div class="mail-empty">No emails to display</div>"#);
        html.push('\n');
    } else {
        for email in emails {
            html.push_str(&email_row(mailbox, email));
        }
    }

    html.push_str("</div>\n");
    html
}

/// Render a single mailbox row
///
/// Sent shows the recipient side; everything else shows the sender. The
/// archive control is omitted in Sent, where it has no meaning.
fn email_row(mailbox: Mailbox, email: &Email) -> String {
    let read_class = if email.read { "read" } else { "unread" };
    let id = email.id.to_string();

    let counterparty = if mailbox == Mailbox::Sent {
        format!("To: {}", email.recipients_display())
    } else {
        format!("From: {}", email.sender)
    };

    let subject = if email.subject.is_empty() {
        "(No subject)".to_string()
    } else {
        email.subject.clone()
    };

    let mut actions = control_button(&Control::read_toggle(email.read), "toggle-read", &id);
    if mailbox != Mailbox::Sent {
        actions.push_str(&control_button(
            &Control::archive_toggle(email.archived),
            "toggle-archive",
            &id,
        ));
    }

    format!(
        r#"<div class="email-item {}" data-action="view" data-id="{}">
<div class="email-content">
<div class="email-header"><strong>{}</strong><span class="email-sep">&middot;</span><span class="email-timestamp">{}</span></div>
<div class="email-subject">{}</div>
</div>
<div class="email-actions">{}</div>
</div>
"#,
        read_class,
        id,
        html_escape(&counterparty),
        html_escape(&email.timestamp),
        html_escape(&subject),
        actions,
    )
}

/// Render the list panel for locally stored drafts
pub fn drafts_page(drafts: &[Draft]) -> String {
    let mut html = String::from(
        r#"<h3>Drafts</h3>
<div class="email-list">
"#,
    );

    if drafts.is_empty() {
        html.push_str(r#"<div class="mail-empty">No drafts available</div>"#);
        html.push('\n');
    } else {
        for draft in drafts {
            html.push_str(&draft_row(draft));
        }
    }

    html.push_str("</div>\n");
    html
}

/// Render a single draft row with edit/delete controls
fn draft_row(draft: &Draft) -> String {
    let recipients = if draft.recipients.trim().is_empty() {
        "(No recipients)".to_string()
    } else {
        format!("To: {}", draft.recipients)
    };

    let subject = if draft.subject.is_empty() {
        "(No subject)".to_string()
    } else {
        draft.subject.clone()
    };

    format!(
        r#"<div class="draft-item" data-action="edit-draft" data-id="{}">
<div class="email-content">
<div class="email-header"><strong>{}</strong><span class="email-sep">&middot;</span><span class="email-timestamp">{}</span></div>
<div class="email-subject">{}</div>
</div>
<div class="email-actions"><button class="mail-action" data-action="edit-draft" data-id="{}" title="Edit Draft"><i class="icon-edit"></i></button><button class="mail-action" data-action="delete-draft" data-id="{}" title="Delete Draft"><i class="icon-trash"></i></button></div>
</div>
"#,
        html_escape(draft.id.as_str()),
        html_escape(&recipients),
        html_escape(&draft.timestamp),
        html_escape(&subject),
        html_escape(draft.id.as_str()),
        html_escape(draft.id.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftId, EmailId};

    fn make_email(id: i64, read: bool) -> Email {
        Email {
            id: EmailId::new(id),
            sender: "alice@example.com".to_string(),
            recipients: vec!["bob@example.com".to_string()],
            subject: "Hello".to_string(),
            body: "Hi".to_string(),
            timestamp: "Aug 06 2026, 10:30 AM".to_string(),
            read,
            archived: false,
        }
    }

    #[test]
    fn test_empty_mailbox_placeholder() {
        let html = mailbox_page(Mailbox::Inbox, &[]);
        assert!(html.contains("No emails to display"));
        assert!(!html.contains("email-item"));
    }

    #[test]
    fn test_rows_keep_backend_order() {
        let emails = vec![make_email(2, false), make_email(1, true)];
        let html = mailbox_page(Mailbox::Inbox, &emails);
        let first = html.find(r#"data-id="2""#).unwrap();
        let second = html.find(r#"data-id="1""#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_read_state_class() {
        let html = mailbox_page(Mailbox::Inbox, &[make_email(1, false)]);
        assert!(html.contains(r#"email-item unread"#));

        let html = mailbox_page(Mailbox::Inbox, &[make_email(1, true)]);
        assert!(html.contains(r#"email-item read"#));
    }

    #[test]
    fn test_sent_shows_recipients_and_no_archive() {
        let html = mailbox_page(Mailbox::Sent, &[make_email(1, true)]);
        assert!(html.contains("To: bob@example.com"));
        assert!(!html.contains("toggle-archive"));

        let html = mailbox_page(Mailbox::Inbox, &[make_email(1, true)]);
        assert!(html.contains("From: alice@example.com"));
        assert!(html.contains("toggle-archive"));
    }

    #[test]
    fn test_subject_is_escaped() {
        let mut email = make_email(1, false);
        email.subject = "<img src=x onerror=alert(1)>".to_string();
        let html = mailbox_page(Mailbox::Inbox, &[email]);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn test_empty_drafts_placeholder() {
        let html = drafts_page(&[]);
        assert!(html.contains("No drafts available"));
        assert!(!html.contains("draft-item"));
    }

    #[test]
    fn test_draft_row_placeholders() {
        let draft = Draft {
            id: DraftId::new("1754473800000"),
            recipients: "  ".to_string(),
            subject: String::new(),
            body: "text".to_string(),
            timestamp: "8/6/2026, 10:30:00 AM".to_string(),
        };
        let html = drafts_page(&[draft]);
        assert!(html.contains("(No recipients)"));
        assert!(html.contains("(No subject)"));
        assert!(html.contains("delete-draft"));
    }
}
