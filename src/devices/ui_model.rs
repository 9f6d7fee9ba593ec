use serde::Serialize;

use super::model::Device;

/// Read-only projection of a paired device for display.
///
/// Built fresh from [`Device`] on every refresh and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceUiModel {
    address: String,
    measurements_count: usize,
    summary: String,
}

impl DeviceUiModel {
    pub fn from_device(device: &Device) -> Self {
        let count = device.measurements.len();
        Self {
            address: device.address.clone(),
            measurements_count: count,
            summary: summarize(count),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn measurements_count(&self) -> usize {
        self.measurements_count
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl From<&Device> for DeviceUiModel {
    fn from(device: &Device) -> Self {
        Self::from_device(device)
    }
}

fn summarize(count: usize) -> String {
    match count {
        0 => "No readings".to_string(),
        1 => "1 reading".to_string(),
        n => format!("{} readings", n),
    }
}
