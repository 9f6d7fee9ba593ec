//! Screen navigation.
//!
//! Feature code publishes [`NavigationEvent`]s through a [`Navigator`];
//! the single [`NavigationHost`] attached to the [`NavigationBus`] applies
//! them to its back stack.

mod bus;
mod event;
mod host;
mod navigator;

pub use bus::{NavigationBus, NavigationError, NavigationSubscription, DEFAULT_BUS_CAPACITY};
pub use event::{Destination, NavigationEvent};
pub use host::NavigationHost;
pub use navigator::{BusNavigator, Navigator};
