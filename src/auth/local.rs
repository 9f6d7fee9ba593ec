//! In-process account backend.

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::config::AccountConfig;

use super::error::AccountError;
use super::invitation::{InvitationAuthManager, InvitationCode};

/// Account backend held in memory, configured from `[account]`.
pub struct LocalAccountBackend {
    inner: RwLock<AccountInner>,
}

struct AccountInner {
    signed_in_user: Option<String>,
    network_available: bool,
    accepted_codes: HashSet<String>,
}

impl LocalAccountBackend {
    pub fn new<I, S>(accepted_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted_codes = accepted_codes
            .into_iter()
            .filter_map(|code| InvitationCode::parse(code.as_ref()).ok())
            .map(|code| code.as_str().to_string())
            .collect();

        Self {
            inner: RwLock::new(AccountInner {
                signed_in_user: None,
                network_available: true,
                accepted_codes,
            }),
        }
    }

    pub fn from_config(config: &AccountConfig) -> Self {
        let backend = Self::new(&config.invitation_codes);
        if let Some(user) = &config.signed_in_user {
            backend.sign_in(user);
        }
        backend.set_network_available(config.network_available);
        backend
    }

    pub fn sign_in(&self, user: &str) {
        self.inner.write().signed_in_user = Some(user.to_string());
        tracing::info!(user, "Signed in");
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.inner.write().signed_in_user.take() {
            tracing::info!(%user, "Signed out");
        }
    }

    pub fn signed_in_user(&self) -> Option<String> {
        self.inner.read().signed_in_user.clone()
    }

    pub fn set_network_available(&self, available: bool) {
        self.inner.write().network_available = available;
    }
}

#[async_trait]
impl InvitationAuthManager for LocalAccountBackend {
    async fn check_invitation_code(&self, code: &InvitationCode) -> Result<(), AccountError> {
        let inner = self.inner.read();
        if !inner.network_available {
            return Err(AccountError::NetworkUnavailable);
        }
        if inner.signed_in_user.is_none() {
            return Err(AccountError::NotSignedIn);
        }
        if !inner.accepted_codes.contains(code.as_str()) {
            return Err(AccountError::InvalidCode);
        }
        Ok(())
    }
}
