//! Lifetime of a UI surface.
//!
//! A [`SurfaceScope`] is owned by whatever hosts a screen. Work started on
//! behalf of that screen holds a [`ScopeHandle`] and stops as soon as the
//! scope is disposed, so a destroyed surface never receives state updates.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Owner side of a surface lifetime. Dropping it disposes the scope.
pub struct SurfaceScope {
    name: &'static str,
    disposed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl SurfaceScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            disposed: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Dispose the surface. Only the first call has an effect.
    pub fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            tracing::debug!(surface = self.name, "Surface disposed");
            self.notify.notify_waiters();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Create a handle for sharing with in-flight work.
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            disposed: Arc::clone(&self.disposed),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Drop for SurfaceScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Lightweight handle for observing disposal.
#[derive(Clone)]
pub struct ScopeHandle {
    disposed: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Resolves once the owning scope is disposed.
    pub async fn disposed(&self) {
        // Register with Notify before reading the flag, otherwise a dispose()
        // landing between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_disposed() {
            return;
        }
        notified.await;
    }
}
