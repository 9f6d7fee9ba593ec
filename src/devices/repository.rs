use std::io;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;

use crate::ui::view_state::OperationError;

use super::model::{Device, Measurement};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("Device '{address}' is not paired")]
    NotFound { address: String },

    #[error("Device store unavailable")]
    Unavailable,

    #[error("Unexpected device error: {0}")]
    Unexpected(String),
}

impl From<io::Error> for DeviceError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::TimedOut => DeviceError::Unavailable,
            _ => DeviceError::Unexpected(err.to_string()),
        }
    }
}

impl OperationError for DeviceError {
    fn timed_out() -> Self {
        DeviceError::Unavailable
    }

    fn unexpected(detail: String) -> Self {
        DeviceError::Unexpected(detail)
    }

    fn error_type(&self) -> &'static str {
        match self {
            DeviceError::NotFound { .. } => "not_found",
            DeviceError::Unavailable => "unavailable",
            DeviceError::Unexpected(_) => "unexpected",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            DeviceError::NotFound { .. } => "That device is no longer paired",
            DeviceError::Unavailable => "Devices are unavailable right now. Try again",
            DeviceError::Unexpected(_) => "Something went wrong. Please try again",
        }
    }
}

/// Source of paired-device state.
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    async fn paired_devices(&self) -> Result<Vec<Device>, DeviceError>;
}

/// Paired devices kept in memory, in pairing order.
#[derive(Default)]
pub struct InMemoryDeviceRepository {
    devices: RwLock<Vec<Device>>,
}

impl InMemoryDeviceRepository {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices: RwLock::new(devices),
        }
    }

    /// Pair a device, replacing any earlier entry with the same address.
    pub fn pair(&self, device: Device) {
        let mut devices = self.devices.write();
        match devices.iter_mut().find(|d| d.address == device.address) {
            Some(existing) => *existing = device,
            None => {
                tracing::info!(address = %device.address, "Device paired");
                devices.push(device);
            }
        }
    }

    pub fn unpair(&self, address: &str) -> Result<Device, DeviceError> {
        let mut devices = self.devices.write();
        let index = devices
            .iter()
            .position(|d| d.address == address)
            .ok_or_else(|| DeviceError::NotFound {
                address: address.to_string(),
            })?;
        tracing::info!(address, "Device unpaired");
        Ok(devices.remove(index))
    }

    pub fn record_measurement(
        &self,
        address: &str,
        measurement: Measurement,
    ) -> Result<(), DeviceError> {
        let mut devices = self.devices.write();
        let device = devices
            .iter_mut()
            .find(|d| d.address == address)
            .ok_or_else(|| DeviceError::NotFound {
                address: address.to_string(),
            })?;
        device.measurements.push(measurement);
        Ok(())
    }
}

#[async_trait]
impl DeviceRepository for InMemoryDeviceRepository {
    async fn paired_devices(&self) -> Result<Vec<Device>, DeviceError> {
        Ok(self.devices.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::MeasurementKind;

    fn reading() -> Measurement {
        Measurement {
            kind: MeasurementKind::HeartRate,
            value: 62.0,
            recorded_at: 1_700_000_000,
        }
    }

    #[tokio::test]
    async fn pair_record_unpair() {
        let repo = InMemoryDeviceRepository::default();
        repo.pair(Device::new("AA:BB:CC:DD:EE:FF", "Band"));
        repo.record_measurement("AA:BB:CC:DD:EE:FF", reading()).unwrap();

        let devices = repo.paired_devices().await.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].measurements.len(), 1);

        repo.unpair("AA:BB:CC:DD:EE:FF").unwrap();
        assert!(repo.paired_devices().await.unwrap().is_empty());
    }

    #[test]
    fn pairing_same_address_replaces() {
        let repo = InMemoryDeviceRepository::default();
        repo.pair(Device::new("11:22:33:44:55:66", "Old"));
        repo.pair(Device::new("11:22:33:44:55:66", "New"));
        assert_eq!(repo.devices.read().len(), 1);
        assert_eq!(repo.devices.read()[0].name, "New");
    }

    #[test]
    fn unknown_address_is_not_found() {
        let repo = InMemoryDeviceRepository::default();
        assert_eq!(
            repo.record_measurement("00:00:00:00:00:00", reading()),
            Err(DeviceError::NotFound {
                address: "00:00:00:00:00:00".to_string()
            })
        );
        assert!(repo.unpair("00:00:00:00:00:00").is_err());
    }

    #[test]
    fn errors_expose_display_classification() {
        assert_eq!(DeviceError::Unavailable.error_type(), "unavailable");
        assert_eq!(
            DeviceError::Unavailable.description(),
            "Devices are unavailable right now. Try again"
        );
    }
}
