//! Compose-panel rendering

use super::{control_button, html_escape};
use crate::controller::{ComposeForm, Control};

/// Render the compose panel with the form's current field values
///
/// A failed validation pass leaves its messages on the form; they render as
/// the inline error list above the fields.
pub fn compose_panel(form: &ComposeForm) -> String {
    let mut html = format!("<h3>{}</h3>\n", form.heading());

    if !form.errors.is_empty() {
        html.push_str(&error_list(&form.errors));
    }

    let draft_attr = match &form.draft_id {
        Some(id) => format!(r#" data-draft-id="{}""#, html_escape(id.as_str())),
        None => String::new(),
    };

    html.push_str(&format!(
        r#"<form class="compose-form" data-action="submit-compose"{}>
<input id="compose-recipients" name="recipients" placeholder="Recipients" value="{}">
<input id="compose-subject" name="subject" placeholder="Subject" value="{}">
<textarea id="compose-body" name="body" placeholder="Body">{}</textarea>
<div class="compose-actions">{}<button class="mail-action" data-action="save-draft" title="Save Draft"><i class="icon-save"></i><span class="button-text">Save Draft</span></button></div>
</form>
"#,
        draft_attr,
        html_escape(&form.recipients),
        html_escape(&form.subject),
        html_escape(&form.body),
        control_button(&Control::send_button(), "send", ""),
    ));

    html
}

/// Render the inline validation-error list
fn error_list(errors: &[String]) -> String {
    let mut html = String::from(
        r#"<div class="compose-errors"><strong>Please correct the following errors:</strong><ul>"#,
    );
    for error in errors {
        html.push_str(&format!("<li>{}</li>", html_escape(error)));
    }
    html.push_str("</ul></div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Draft, DraftId};

    #[test]
    fn test_blank_form() {
        let form = ComposeForm::new();
        let html = compose_panel(&form);
        assert!(html.contains("Compose New Email"));
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains("compose-errors"));
        assert!(!html.contains("data-draft-id"));
    }

    #[test]
    fn test_errors_render_inline() {
        let mut form = ComposeForm::new();
        form.errors = vec!["Recipients field is required".to_string()];
        let html = compose_panel(&form);
        assert!(html.contains("Please correct the following errors"));
        assert!(html.contains("<li>Recipients field is required</li>"));
    }

    #[test]
    fn test_draft_id_attribute() {
        let mut form = ComposeForm::new();
        form.load_draft(&Draft {
            id: DraftId::new("1754473800000"),
            recipients: "bob@example.com".to_string(),
            subject: "WIP".to_string(),
            body: "text".to_string(),
            timestamp: "8/6/2026, 10:30:00 AM".to_string(),
        });
        let html = compose_panel(&form);
        assert!(html.contains(r#"data-draft-id="1754473800000""#));
        assert!(html.contains(r#"value="bob@example.com""#));
    }

    #[test]
    fn test_field_values_escaped() {
        let mut form = ComposeForm::new();
        form.subject = r#""><script>"#.to_string();
        let html = compose_panel(&form);
        assert!(!html.contains("<script>"));
    }
}
