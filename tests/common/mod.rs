//! Shared test doubles.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use healthhub::auth::{AccountError, InvitationAuthManager, InvitationCode};
use healthhub::navigation::{NavigationEvent, Navigator};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Navigator that records every event it is asked to publish.
#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavigationEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, event: NavigationEvent) {
        self.events.lock().push(event);
    }
}

/// Invitation backend returning a fixed outcome after an optional delay.
pub struct ScriptedAuth {
    outcome: Mutex<Result<(), AccountError>>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedAuth {
    pub fn new(outcome: Result<(), AccountError>) -> Arc<Self> {
        Self::delayed(outcome, Duration::ZERO)
    }

    pub fn delayed(outcome: Result<(), AccountError>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(outcome),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn set_outcome(&self, outcome: Result<(), AccountError>) {
        *self.outcome.lock() = outcome;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InvitationAuthManager for ScriptedAuth {
    async fn check_invitation_code(&self, _code: &InvitationCode) -> Result<(), AccountError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.lock().clone()
    }
}
