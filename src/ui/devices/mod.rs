//! Paired-devices screen.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::devices::{DeviceError, DeviceRepository, DeviceUiModel};
use crate::lifecycle::ScopeHandle;
use crate::navigation::{Destination, Navigator};
use crate::ui::view_state::{OperationRunner, RunError, ViewState};

pub struct DevicesViewModel {
    repository: Arc<dyn DeviceRepository>,
    navigator: Arc<dyn Navigator>,
    runner: OperationRunner<DeviceError>,
    devices: RwLock<Arc<[DeviceUiModel]>>,
}

impl DevicesViewModel {
    pub fn new(
        repository: Arc<dyn DeviceRepository>,
        navigator: Arc<dyn Navigator>,
        scope: ScopeHandle,
    ) -> Self {
        Self {
            repository,
            navigator,
            runner: OperationRunner::new("refresh_devices", scope),
            devices: RwLock::new(Arc::from(Vec::new())),
        }
    }

    pub fn state(&self) -> ViewState<DeviceError> {
        self.runner.state()
    }

    pub fn watch(&self) -> watch::Receiver<ViewState<DeviceError>> {
        self.runner.watch()
    }

    /// Models from the last successful refresh.
    pub fn devices(&self) -> Arc<[DeviceUiModel]> {
        Arc::clone(&self.devices.read())
    }

    /// Reload paired devices and rebuild every UI model.
    ///
    /// On failure the previously displayed list is kept.
    pub async fn refresh(&self) -> Result<(), RunError> {
        let repository = Arc::clone(&self.repository);
        let outcome = self
            .runner
            .run(async move {
                let devices = repository.paired_devices().await?;
                Ok::<_, DeviceError>(
                    devices
                        .iter()
                        .map(DeviceUiModel::from_device)
                        .collect::<Vec<_>>(),
                )
            })
            .await?;

        if let Ok(models) = outcome {
            tracing::debug!(count = models.len(), "Device list refreshed");
            *self.devices.write() = Arc::from(models);
        }
        Ok(())
    }

    /// Open the detail screen for a displayed device.
    pub fn open(&self, address: &str) -> Result<(), DeviceError> {
        if !self.devices.read().iter().any(|d| d.address() == address) {
            return Err(DeviceError::NotFound {
                address: address.to_string(),
            });
        }
        self.navigator.navigate_to(Destination::DeviceDetail {
            address: address.to_string(),
        });
        Ok(())
    }
}
