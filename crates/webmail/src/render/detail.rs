//! Detail-panel rendering for a single email

use super::{format_body, html_escape};
use crate::models::Email;

/// Render the detail view for one email
///
/// Everything user-controlled goes through the escaper; the body keeps its
/// line structure via `format_body`.
pub fn email_detail(email: &Email) -> String {
    let subject = if email.subject.is_empty() {
        "(No subject)".to_string()
    } else {
        email.subject.clone()
    };
    let id = email.id.to_string();

    format!(
        r#"<div class="email-detail">
<div class="email-detail-header"><h5>{}</h5><small class="email-timestamp">{}</small></div>
<div class="email-metadata">
<p><strong>From:</strong> {}</p>
<p><strong>To:</strong> {}</p>
</div>
<div class="email-detail-actions">
<button class="mail-action" data-action="reply" data-id="{}" title="Reply to this email"><i class="icon-reply"></i><span class="button-text">Reply</span></button>
<button class="mail-action" data-action="back" title="Go back"><i class="icon-arrow-left"></i><span class="button-text">Back</span></button>
</div>
<div class="email-body">{}</div>
</div>
"#,
        html_escape(&subject),
        html_escape(&email.timestamp),
        html_escape(&email.sender),
        html_escape(&email.recipients_display()),
        id,
        format_body(&email.body),
    )
}

/// Render the dismissible load-failure state for the list panel
pub fn error_banner(message: &str) -> String {
    format!(
        r#"<div class="mail-error" data-action="dismiss-error">{}</div>
"#,
        html_escape(message)
    )
}
