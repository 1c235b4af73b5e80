//! View controller for panel state and user actions
//!
//! Owns which of the two panels is visible, fetches data through the API
//! client, and wires every row- and form-level action. Rendering lives in
//! [`crate::render`]; this module only decides what to render.

mod compose;
mod handler;
mod view_state;

pub use compose::{ComposeForm, reply_subject};
pub use handler::{SEND_REDIRECT_DELAY, SubmitOutcome, ViewController};
pub use view_state::{Control, Panel, ViewState};
