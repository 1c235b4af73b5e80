//! Compose-form validation
//!
//! Runs entirely client-side, before any network call. A non-empty result
//! aborts submission and is rendered as the inline error list.

/// Maximum subject length accepted by the backend schema
const MAX_SUBJECT_CHARS: usize = 255;

/// Validate the compose form fields
///
/// Returns one message per problem, in field order. An empty result means
/// the form may be submitted.
pub fn validate_compose(recipients: &str, subject: &str, body: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if recipients.trim().is_empty() {
        errors.push("Recipients field is required".to_string());
    } else {
        for addr in recipients.split(',').map(str::trim) {
            if !is_valid_address(addr) {
                errors.push(format!("Invalid email format: {}", addr));
            }
        }
    }

    if subject.trim().is_empty() {
        errors.push("Subject field is required".to_string());
    } else if subject.chars().count() > MAX_SUBJECT_CHARS {
        errors.push("Subject must be less than 256 characters".to_string());
    }

    if body.trim().is_empty() {
        errors.push("Email body is required".to_string());
    }

    errors
}

/// Check an address against the basic `local@domain.tld` shape
///
/// Deliberately loose: no whitespace, exactly one `@`, and a dot with
/// characters on both sides somewhere in the domain. Real deliverability
/// is the backend's call.
pub fn is_valid_address(addr: &str) -> bool {
    if addr.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = addr.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    has_interior_dot(domain)
}

/// True when the domain contains a dot with at least one character on
/// each side
fn has_interior_dot(domain: &str) -> bool {
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
