use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    HeartRate,
    BloodPressure,
    Weight,
    Spo2,
}

/// One reading recorded by a paired device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub kind: MeasurementKind,
    pub value: f64,
    /// Unix seconds.
    pub recorded_at: u64,
}

/// Device state as the pairing layer tracks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Hardware address, unique per device (e.g. "AA:BB:CC:DD:EE:FF").
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl Device {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            measurements: Vec::new(),
        }
    }
}
