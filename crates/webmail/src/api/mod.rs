//! Backend REST API integration
//!
//! This module provides:
//! - A synchronous HTTP client for the `/emails` surface
//! - Wire payload types for send and partial-update requests
//! - CSRF token extraction from a cookie header

mod client;
mod cookies;

pub use client::{ApiError, MailApiClient};
pub use cookies::{cookie_value, csrf_token_from_cookies};

/// Backend wire payload types
pub mod wire {
    use serde::{Deserialize, Serialize};

    /// Payload for `POST /emails`
    ///
    /// `recipients` is the raw comma-separated value from the compose form;
    /// the backend does its own splitting.
    #[derive(Debug, Clone, Serialize)]
    pub struct OutgoingEmail {
        pub recipients: String,
        pub subject: String,
        pub body: String,
    }

    /// Partial update for `PUT /emails/{id}`
    ///
    /// Exactly one flag is set per request; the other is omitted from the
    /// JSON body entirely.
    #[derive(Debug, Clone, Copy, Default, Serialize)]
    pub struct EmailPatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub read: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub archived: Option<bool>,
    }

    impl EmailPatch {
        /// Patch setting the read flag
        pub fn read(read: bool) -> Self {
            Self {
                read: Some(read),
                ..Default::default()
            }
        }

        /// Patch setting the archived flag
        pub fn archived(archived: bool) -> Self {
            Self {
                archived: Some(archived),
                ..Default::default()
            }
        }
    }

    /// Error payload the backend attaches to 4xx responses
    #[derive(Debug, Deserialize)]
    pub struct ErrorResponse {
        pub error: String,
    }

    /// Acknowledgement body for a successful send
    #[derive(Debug, Deserialize)]
    pub struct SendResponse {
        pub message: Option<String>,
    }

}
