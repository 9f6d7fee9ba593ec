//! Hot multicast channel for navigation events.
//!
//! Subscribers only observe events published after they subscribed.
//! Nothing is buffered for late subscribers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use super::event::{Destination, NavigationEvent};
use super::host::{HostSlot, NavigationHost};

/// Default number of events a slow subscriber may fall behind before it
/// starts skipping.
pub const DEFAULT_BUS_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("A navigation host is already attached to this bus")]
    HostAlreadyAttached,

    #[error("Navigation bus has been torn down")]
    TornDown,
}

/// Shared navigation bus. Cloning yields another handle to the same bus.
#[derive(Clone)]
pub struct NavigationBus {
    inner: Arc<BusInner>,
}

struct BusInner {
    sender: RwLock<Option<broadcast::Sender<NavigationEvent>>>,
    host_attached: Arc<AtomicBool>,
}

impl NavigationBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            inner: Arc::new(BusInner {
                sender: RwLock::new(Some(sender)),
                host_attached: Arc::new(AtomicBool::new(false)),
            }),
        }
    }

    /// Publish an event to every current subscriber.
    ///
    /// Never blocks. Returns how many subscribers will observe the event;
    /// zero when nobody is listening or the bus has been torn down.
    pub fn publish(&self, event: NavigationEvent) -> usize {
        let guard = self.inner.sender.read();
        let Some(sender) = guard.as_ref() else {
            tracing::debug!(%event, "Navigation bus torn down, dropping event");
            return 0;
        };

        match sender.send(event) {
            Ok(receivers) => {
                tracing::trace!(receivers, "Navigation event published");
                receivers
            }
            Err(broadcast::error::SendError(event)) => {
                tracing::debug!(%event, "No navigation subscribers, dropping event");
                0
            }
        }
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> NavigationSubscription {
        match self.inner.sender.read().as_ref() {
            Some(sender) => NavigationSubscription {
                receiver: sender.subscribe(),
            },
            None => {
                // Already finished: the sender is dropped immediately.
                let (_, receiver) = broadcast::channel(1);
                NavigationSubscription { receiver }
            }
        }
    }

    /// Attach the single navigation host.
    pub fn attach_host(&self, start: Destination) -> Result<NavigationHost, NavigationError> {
        if self.is_torn_down() {
            return Err(NavigationError::TornDown);
        }
        if self
            .inner
            .host_attached
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(NavigationError::HostAlreadyAttached);
        }

        let slot = HostSlot::new(Arc::clone(&self.inner.host_attached));
        Ok(NavigationHost::new(self.subscribe(), start, slot))
    }

    /// End every subscription. Later publishes become no-ops.
    pub fn teardown(&self) {
        if self.inner.sender.write().take().is_some() {
            tracing::debug!("Navigation bus torn down");
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.sender.read().is_none()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .sender
            .read()
            .as_ref()
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }
}

/// Live sequence of navigation events.
pub struct NavigationSubscription {
    receiver: broadcast::Receiver<NavigationEvent>,
}

impl NavigationSubscription {
    /// Wait for the next event. `None` once the bus is torn down and every
    /// pending event has been delivered.
    pub async fn recv(&mut self) -> Option<NavigationEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Navigation subscriber lagged, events skipped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next pending event without waiting.
    pub fn try_recv(&mut self) -> Option<NavigationEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Navigation subscriber lagged, events skipped");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_reaches_nobody() {
        let bus = NavigationBus::new(4);
        assert_eq!(bus.publish(NavigationEvent::Back), 0);
    }

    #[test]
    fn publish_counts_subscribers() {
        let bus = NavigationBus::new(4);
        let _a = bus.subscribe();
        let _b = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(bus.publish(NavigationEvent::Back), 2);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let bus = NavigationBus::new(0);
        let mut sub = bus.subscribe();
        bus.publish(NavigationEvent::Back);
        assert_eq!(sub.try_recv(), Some(NavigationEvent::Back));
    }

    #[test]
    fn lagging_subscriber_skips_overwritten_events() {
        let bus = NavigationBus::new(2);
        let mut sub = bus.subscribe();
        for dest in [
            Destination::Home,
            Destination::Settings,
            Destination::DeviceList,
        ] {
            bus.publish(NavigationEvent::NavigateTo(dest));
        }
        assert_eq!(
            sub.try_recv(),
            Some(NavigationEvent::NavigateTo(Destination::Settings))
        );
        assert_eq!(
            sub.try_recv(),
            Some(NavigationEvent::NavigateTo(Destination::DeviceList))
        );
        assert_eq!(sub.try_recv(), None);
    }

    #[test]
    fn teardown_is_idempotent_and_publish_is_noop() {
        let bus = NavigationBus::new(4);
        bus.teardown();
        bus.teardown();
        assert!(bus.is_torn_down());
        assert_eq!(bus.publish(NavigationEvent::Back), 0);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn attach_after_teardown_fails() {
        let bus = NavigationBus::new(4);
        bus.teardown();
        assert_eq!(
            bus.attach_host(Destination::Home).err(),
            Some(NavigationError::TornDown)
        );
    }
}
