//! Domain models for webmail entities

mod draft;
mod email;
mod mailbox;

pub use draft::{Draft, DraftId};
pub use email::{Email, EmailId};
pub use mailbox::Mailbox;
