use super::bus::NavigationBus;
use super::event::{Destination, NavigationEvent};

/// Navigation capability handed to feature view-models.
pub trait Navigator: Send + Sync {
    fn navigate(&self, event: NavigationEvent);

    fn navigate_to(&self, destination: Destination) {
        self.navigate(NavigationEvent::NavigateTo(destination));
    }

    fn back(&self) {
        self.navigate(NavigationEvent::Back);
    }
}

/// Navigator that publishes onto a [`NavigationBus`].
#[derive(Clone)]
pub struct BusNavigator {
    bus: NavigationBus,
}

impl BusNavigator {
    pub fn new(bus: NavigationBus) -> Self {
        Self { bus }
    }
}

impl Navigator for BusNavigator {
    fn navigate(&self, event: NavigationEvent) {
        self.bus.publish(event);
    }
}
