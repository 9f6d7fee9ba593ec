//! Invitation-code screen.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::auth::{AccountError, InvitationAuthManager, InvitationCode};
use crate::lifecycle::ScopeHandle;
use crate::navigation::{Destination, NavigationEvent, Navigator};
use crate::ui::view_state::{OperationRunner, RunError, ViewState};

pub struct InvitationViewModel {
    auth: Arc<dyn InvitationAuthManager>,
    navigator: Arc<dyn Navigator>,
    runner: OperationRunner<AccountError>,
}

impl InvitationViewModel {
    pub fn new(
        auth: Arc<dyn InvitationAuthManager>,
        navigator: Arc<dyn Navigator>,
        scope: ScopeHandle,
        timeout: Duration,
    ) -> Self {
        Self {
            auth,
            navigator,
            runner: OperationRunner::new("check_invitation_code", scope).with_timeout(timeout),
        }
    }

    pub fn state(&self) -> ViewState<AccountError> {
        self.runner.state()
    }

    pub fn watch(&self) -> watch::Receiver<ViewState<AccountError>> {
        self.runner.watch()
    }

    /// Check `raw` and, when accepted, move on to onboarding.
    ///
    /// Blank input ends in `Error(InvalidCode)` without reaching the
    /// backend. A submit while a check is running returns
    /// [`RunError::Busy`].
    pub async fn submit(&self, raw: &str) -> Result<(), RunError> {
        let code = match InvitationCode::parse(raw) {
            Ok(code) => code,
            Err(error) => return self.runner.reject(error),
        };

        let auth = Arc::clone(&self.auth);
        let outcome = self
            .runner
            .run(async move { auth.check_invitation_code(&code).await })
            .await?;

        if outcome.is_ok() {
            self.navigator
                .navigate(NavigationEvent::ReplaceAll(Destination::Onboarding));
        }
        Ok(())
    }
}
