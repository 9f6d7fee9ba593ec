//! Composition root: binds concrete backends to the capability traits.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{InvitationAuthManager, LocalAccountBackend};
use crate::config::Config;
use crate::devices::{DeviceRepository, InMemoryDeviceRepository};
use crate::lifecycle::ScopeHandle;
use crate::navigation::{
    BusNavigator, Destination, NavigationBus, NavigationError, NavigationHost, Navigator,
};
use crate::ui::{DevicesViewModel, InvitationViewModel};

/// Long-lived collaborators shared by every screen.
pub struct AppContainer {
    config: Config,
    bus: NavigationBus,
    navigator: Arc<dyn Navigator>,
    account: Arc<LocalAccountBackend>,
    devices: Arc<InMemoryDeviceRepository>,
}

impl AppContainer {
    pub fn new(config: Config) -> Self {
        let bus = NavigationBus::new(config.navigation.bus_capacity);
        let navigator: Arc<dyn Navigator> = Arc::new(BusNavigator::new(bus.clone()));
        let account = Arc::new(LocalAccountBackend::from_config(&config.account));
        let devices = Arc::new(InMemoryDeviceRepository::new(config.devices.clone()));

        tracing::debug!(
            bus_capacity = config.navigation.bus_capacity,
            devices = config.devices.len(),
            "Application container wired"
        );

        Self {
            config,
            bus,
            navigator,
            account,
            devices,
        }
    }

    pub fn navigator(&self) -> Arc<dyn Navigator> {
        Arc::clone(&self.navigator)
    }

    pub fn account(&self) -> &Arc<LocalAccountBackend> {
        &self.account
    }

    pub fn device_repository(&self) -> &Arc<InMemoryDeviceRepository> {
        &self.devices
    }

    pub fn attach_host(&self) -> Result<NavigationHost, NavigationError> {
        self.bus.attach_host(Destination::Home)
    }

    pub fn invitation_view_model(&self, scope: ScopeHandle) -> InvitationViewModel {
        let auth: Arc<dyn InvitationAuthManager> = self.account.clone();
        InvitationViewModel::new(
            auth,
            self.navigator(),
            scope,
            Duration::from_secs(self.config.invitation.timeout_seconds),
        )
    }

    pub fn devices_view_model(&self, scope: ScopeHandle) -> DevicesViewModel {
        let repository: Arc<dyn DeviceRepository> = self.devices.clone();
        DevicesViewModel::new(repository, self.navigator(), scope)
    }

    /// Tear down shared resources. Pending navigation is dropped.
    pub fn shutdown(&self) {
        self.bus.teardown();
    }
}
