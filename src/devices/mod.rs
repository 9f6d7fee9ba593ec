//! Paired measurement devices and their display projection.

mod model;
mod repository;
mod ui_model;

pub use model::{Device, Measurement, MeasurementKind};
pub use repository::{DeviceError, DeviceRepository, InMemoryDeviceRepository};
pub use ui_model::DeviceUiModel;
