//! Backend API HTTP client
//!
//! Provides methods for fetching mailboxes, sending messages, and flipping
//! read/archived flags. Uses synchronous HTTP (ureq) to match the
//! single-threaded, sequential network model of the client: calls are not
//! cancelable, carry no timeout, and are never retried.

use anyhow::Context;
use log::debug;
use ureq::Agent;
use url::Url;

use super::wire::{EmailPatch, ErrorResponse, OutgoingEmail};
use crate::config::ClientConfig;
use crate::models::{Email, EmailId, Mailbox};

/// Errors surfaced by backend API calls
///
/// Every failure is terminal for the user action that triggered it; the
/// controller reports it and re-enables the acting control.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or protocol failure before a usable HTTP response arrived
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),
    /// The backend rejected the request with an `{"error": ...}` payload
    #[error("{0}")]
    Backend(String),
    /// Non-success status without a usable error payload
    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// HTTP client for the `/emails` surface
pub struct MailApiClient {
    agent: Agent,
    base_url: Url,
    csrf_token: Option<String>,
}

impl MailApiClient {
    /// Create a client for the given backend base URL
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid backend base URL: {}", base_url))?;

        // Error statuses stay regular responses so the backend's
        // {"error": ...} body remains readable
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            base_url,
            csrf_token: None,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        let mut client = Self::new(&config.base_url)?;
        client.csrf_token = config.csrf_token.clone();
        Ok(client)
    }

    /// Set the CSRF token echoed on mutating requests
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Full URL for a path under the backend base
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Fetch the named mailbox collection, in backend order
    pub fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>, ApiError> {
        let url = self.endpoint(&format!("emails/{}", mailbox.as_str()));
        debug!("GET {}", url);

        let mut response = self.agent.get(&url).call()?;
        if !response.status().is_success() {
            return Err(error_from(&mut response));
        }

        let emails: Vec<Email> = response.body_mut().read_json()?;
        Ok(emails)
    }

    /// Fetch a single email by id
    pub fn get_email(&self, id: EmailId) -> Result<Email, ApiError> {
        let url = self.endpoint(&format!("emails/{}", id));
        debug!("GET {}", url);

        let mut response = self.agent.get(&url).call()?;
        if !response.status().is_success() {
            return Err(error_from(&mut response));
        }

        let email: Email = response.body_mut().read_json()?;
        Ok(email)
    }

    /// Send a message via `POST /emails`
    ///
    /// `recipients` is the comma-separated value from the compose form;
    /// the backend resolves individual addresses and reports unknown ones
    /// through its error payload.
    pub fn send_email(
        &self,
        recipients: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("emails");
        debug!("POST {}", url);

        let payload = OutgoingEmail {
            recipients: recipients.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };

        let mut request = self.agent.post(&url);
        if let Some(token) = &self.csrf_token {
            request = request.header("X-CSRFToken", token);
        }

        let mut response = request.send_json(&payload)?;
        if !response.status().is_success() {
            return Err(error_from(&mut response));
        }
        Ok(())
    }

    /// Flip a read/archived flag via `PUT /emails/{id}`
    ///
    /// The backend returns no meaningful body; success is the status alone.
    pub fn update_email(&self, id: EmailId, patch: EmailPatch) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("emails/{}", id));
        debug!("PUT {}", url);

        let mut request = self.agent.put(&url);
        if let Some(token) = &self.csrf_token {
            request = request.header("X-CSRFToken", token);
        }

        let mut response = request.send_json(&patch)?;
        if !response.status().is_success() {
            return Err(error_from(&mut response));
        }
        Ok(())
    }
}

/// Build an ApiError from a non-success response
///
/// Prefers the backend's `{"error": ...}` payload; falls back to the bare
/// status code when the body isn't one.
fn error_from(response: &mut ureq::http::Response<ureq::Body>) -> ApiError {
    let status = response.status().as_u16();
    match response.body_mut().read_json::<ErrorResponse>() {
        Ok(err) => ApiError::Backend(err.error),
        Err(_) => ApiError::Status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let client = MailApiClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.endpoint("emails/inbox"),
            "http://localhost:8000/emails/inbox"
        );
        assert_eq!(client.endpoint("emails"), "http://localhost:8000/emails");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = MailApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(
            client.endpoint("emails/5"),
            "http://localhost:8000/emails/5"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(MailApiClient::new("not a url").is_err());
    }

    #[test]
    fn test_backend_error_display() {
        let err = ApiError::Backend("User with email x@y.z does not exist.".to_string());
        assert_eq!(err.to_string(), "User with email x@y.z does not exist.");
    }
}
