use std::io;

use thiserror::Error;

use crate::ui::view_state::OperationError;

/// Classified failures of account capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Invalid invitation code")]
    InvalidCode,

    #[error("Network unavailable")]
    NetworkUnavailable,

    /// Anything the backend could not classify.
    #[error("Unexpected account error: {0}")]
    Unexpected(String),
}

impl From<io::Error> for AccountError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::TimedOut => AccountError::NetworkUnavailable,
            _ => AccountError::Unexpected(err.to_string()),
        }
    }
}

impl OperationError for AccountError {
    fn timed_out() -> Self {
        AccountError::NetworkUnavailable
    }

    fn unexpected(detail: String) -> Self {
        AccountError::Unexpected(detail)
    }

    fn error_type(&self) -> &'static str {
        match self {
            AccountError::NotSignedIn => "not_signed_in",
            AccountError::InvalidCode => "invalid_code",
            AccountError::NetworkUnavailable => "network_unavailable",
            AccountError::Unexpected(_) => "unexpected",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            AccountError::NotSignedIn => "Please sign in before entering an invitation code",
            AccountError::InvalidCode => "That invitation code is not valid",
            AccountError::NetworkUnavailable => "No connection. Check your network and try again",
            AccountError::Unexpected(_) => "Something went wrong. Please try again",
        }
    }
}
