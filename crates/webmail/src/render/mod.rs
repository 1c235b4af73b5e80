//! HTML rendering for the two panels
//!
//! This module consolidates all HTML generation: components take data in and
//! emit element markup, keeping fetch and validation logic out of the render
//! path. Emitted controls carry `data-action`/`data-id` attributes for the
//! hosting shell to wire; no handler state lives in the markup.

mod compose;
mod detail;
mod mailbox;

pub use compose::compose_panel;
pub use detail::{email_detail, error_banner};
pub use mailbox::{drafts_page, mailbox_page};

use crate::controller::Control;

/// Simple HTML escape for user-generated content
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format an email body for display
///
/// Escapes the text and renders embedded newlines as `<br>`; an empty body
/// gets a placeholder instead.
pub fn format_body(body: &str) -> String {
    if body.is_empty() {
        return "<em>(No content)</em>".to_string();
    }
    html_escape(body).replace('\n', "<br>")
}

/// Render a control as a button element
///
/// `action` and `id` become the data attributes the shell dispatches on.
pub fn control_button(control: &Control, action: &str, id: &str) -> String {
    let disabled = if control.disabled { " disabled" } else { "" };
    let label = if control.label.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="button-text">{}</span>"#, html_escape(control.label))
    };

    format!(
        r#"<button class="mail-action" data-action="{}" data-id="{}" title="{}"{}><i class="icon-{}"></i>{}</button>"#,
        html_escape(action),
        html_escape(id),
        html_escape(control.title),
        disabled,
        control.icon,
        label,
    )
}
