//! Cookie parsing for CSRF token extraction
//!
//! The backend issues its CSRF token as a cookie; mutating requests echo it
//! back in the `X-CSRFToken` header.

/// Name of the cookie carrying the CSRF token
const CSRF_COOKIE: &str = "csrftoken";

/// Extract a named cookie's value from a `Cookie`-header-shaped string
///
/// Values are percent-decoded. Returns None when the cookie is absent.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            return Some(decoded);
        }
    }
    None
}

/// Extract the CSRF token from a cookie header string
pub fn csrf_token_from_cookies(cookie_header: &str) -> Option<String> {
    cookie_value(cookie_header, CSRF_COOKIE)
}
