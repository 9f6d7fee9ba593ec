use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::lifecycle::ScopeHandle;

use super::bus::NavigationSubscription;
use super::event::{Destination, NavigationEvent};

/// Releases the bus' host slot when the host goes away.
pub(crate) struct HostSlot {
    attached: Arc<AtomicBool>,
}

impl HostSlot {
    pub(crate) fn new(attached: Arc<AtomicBool>) -> Self {
        Self { attached }
    }
}

impl Drop for HostSlot {
    fn drop(&mut self) {
        self.attached.store(false, Ordering::SeqCst);
    }
}

/// The component that displays screens. Owns the back stack and reacts to
/// events from the bus.
///
/// The back stack is never empty: its first entry is the root destination.
pub struct NavigationHost {
    subscription: NavigationSubscription,
    back_stack: Vec<Destination>,
    _slot: HostSlot,
}

impl NavigationHost {
    pub(crate) fn new(
        subscription: NavigationSubscription,
        start: Destination,
        slot: HostSlot,
    ) -> Self {
        Self {
            subscription,
            back_stack: vec![start],
            _slot: slot,
        }
    }

    pub fn current(&self) -> &Destination {
        // Invariant: the stack always holds the root.
        &self.back_stack[self.back_stack.len() - 1]
    }

    pub fn back_stack(&self) -> &[Destination] {
        &self.back_stack
    }

    /// Apply one event to the back stack and return the new current screen.
    ///
    /// Navigating to the screen already on top does not push a duplicate.
    pub fn apply(&mut self, event: &NavigationEvent) -> &Destination {
        let previous = self.current().clone();
        match event {
            NavigationEvent::NavigateTo(destination) => {
                if &previous != destination {
                    self.back_stack.push(destination.clone());
                }
            }
            NavigationEvent::ReplaceAll(destination) => {
                self.back_stack.clear();
                self.back_stack.push(destination.clone());
            }
            NavigationEvent::Back => {
                if self.back_stack.len() > 1 {
                    self.back_stack.pop();
                }
            }
        }

        tracing::info!(
            from = %previous,
            to = %self.current(),
            depth = self.back_stack.len(),
            %event,
            "Navigation"
        );
        self.current()
    }

    /// Apply every event that is already pending. Returns how many were
    /// applied.
    pub fn drain_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.subscription.try_recv() {
            self.apply(&event);
            applied += 1;
        }
        applied
    }

    /// Consume events until the bus is torn down or the scope is disposed.
    pub async fn run(mut self, scope: ScopeHandle) -> Self {
        loop {
            tokio::select! {
                biased;
                _ = scope.disposed() => break,
                event = self.subscription.recv() => match event {
                    Some(event) => {
                        self.apply(&event);
                    }
                    None => break,
                },
            }
        }
        tracing::debug!(current = %self.current(), "Navigation host stopped");
        self
    }
}
