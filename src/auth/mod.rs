//! Account capabilities: invitation-code verification and its errors.

mod error;
mod invitation;
mod local;

pub use error::AccountError;
pub use invitation::{InvitationAuthManager, InvitationCode};
pub use local::LocalAccountBackend;
