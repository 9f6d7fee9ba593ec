use std::fmt;

use async_trait::async_trait;

use super::error::AccountError;

/// A user-supplied invitation code, trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvitationCode(String);

impl InvitationCode {
    /// Parse raw input. Blank input is [`AccountError::InvalidCode`].
    pub fn parse(raw: &str) -> Result<Self, AccountError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(AccountError::InvalidCode);
        }
        Ok(Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvitationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verifies invitation codes against the account backend.
///
/// Returns `Ok(())` or a classified [`AccountError`]; never both, never
/// neither. Repeated calls with the same code yield the same outcome while
/// the account state is unchanged.
#[async_trait]
pub trait InvitationAuthManager: Send + Sync {
    async fn check_invitation_code(&self, code: &InvitationCode) -> Result<(), AccountError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes() {
        let code = InvitationCode::parse("  abc123 ").unwrap();
        assert_eq!(code.as_str(), "ABC123");
    }

    #[test]
    fn blank_is_invalid() {
        assert_eq!(InvitationCode::parse("   "), Err(AccountError::InvalidCode));
        assert_eq!(InvitationCode::parse(""), Err(AccountError::InvalidCode));
    }
}
