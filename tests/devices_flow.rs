mod common;

use common::RecordingNavigator;
use healthhub::devices::{
    Device, DeviceError, DeviceRepository, DeviceUiModel, InMemoryDeviceRepository, Measurement,
    MeasurementKind,
};
use healthhub::lifecycle::SurfaceScope;
use healthhub::navigation::{Destination, NavigationEvent};
use healthhub::ui::view_state::ViewState;
use healthhub::ui::DevicesViewModel;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn reading(at: u64) -> Measurement {
    Measurement {
        kind: MeasurementKind::Weight,
        value: 71.5,
        recorded_at: at,
    }
}

fn repo_with_cuff(readings: usize) -> Arc<InMemoryDeviceRepository> {
    let repo = Arc::new(InMemoryDeviceRepository::default());
    repo.pair(Device::new("AA:BB:CC:DD:EE:FF", "Cuff"));
    for i in 0..readings {
        repo.record_measurement("AA:BB:CC:DD:EE:FF", reading(i as u64))
            .unwrap();
    }
    repo
}

#[tokio::test]
async fn refresh_projects_devices() {
    let repo = repo_with_cuff(3);
    let navigator = Arc::new(RecordingNavigator::default());
    let scope = SurfaceScope::new("devices");
    let vm = DevicesViewModel::new(repo, navigator, scope.handle());

    vm.refresh().await.unwrap();

    assert_eq!(vm.state(), ViewState::Idle);
    let devices = vm.devices();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].address(), "AA:BB:CC:DD:EE:FF");
    assert_eq!(devices[0].measurements_count(), 3);
    assert_eq!(devices[0].summary(), "3 readings");
}

#[tokio::test]
async fn refresh_rebuilds_models_instead_of_mutating() {
    let repo = repo_with_cuff(1);
    let navigator = Arc::new(RecordingNavigator::default());
    let scope = SurfaceScope::new("devices");
    let vm = DevicesViewModel::new(repo.clone(), navigator, scope.handle());

    vm.refresh().await.unwrap();
    let before = vm.devices();

    repo.record_measurement("AA:BB:CC:DD:EE:FF", reading(99)).unwrap();
    vm.refresh().await.unwrap();
    let after = vm.devices();

    assert_eq!(before[0].summary(), "1 reading");
    assert_eq!(after[0].summary(), "2 readings");
    assert!(!Arc::ptr_eq(&before, &after));
}

struct OfflineRepository;

#[async_trait::async_trait]
impl DeviceRepository for OfflineRepository {
    async fn paired_devices(&self) -> Result<Vec<Device>, DeviceError> {
        Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "scan timed out").into())
    }
}

#[tokio::test]
async fn io_failure_is_classified() {
    let navigator = Arc::new(RecordingNavigator::default());
    let scope = SurfaceScope::new("devices");
    let vm = DevicesViewModel::new(Arc::new(OfflineRepository), navigator, scope.handle());

    vm.refresh().await.unwrap();
    assert_eq!(vm.state(), ViewState::Error(DeviceError::Unavailable));
    assert!(vm.devices().is_empty());
}

/// Serves the wrapped repository until switched offline.
struct FlakyRepository {
    inner: Arc<InMemoryDeviceRepository>,
    offline: AtomicBool,
}

#[async_trait::async_trait]
impl DeviceRepository for FlakyRepository {
    async fn paired_devices(&self) -> Result<Vec<Device>, DeviceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DeviceError::Unavailable);
        }
        self.inner.paired_devices().await
    }
}

#[tokio::test]
async fn failed_refresh_keeps_previous_list() {
    let repo = Arc::new(FlakyRepository {
        inner: repo_with_cuff(2),
        offline: AtomicBool::new(false),
    });
    let navigator = Arc::new(RecordingNavigator::default());
    let scope = SurfaceScope::new("devices");
    let vm = DevicesViewModel::new(repo.clone(), navigator, scope.handle());

    vm.refresh().await.unwrap();
    let before = vm.devices();
    assert_eq!(before.len(), 1);

    repo.offline.store(true, Ordering::SeqCst);
    vm.refresh().await.unwrap();

    assert_eq!(vm.state(), ViewState::Error(DeviceError::Unavailable));
    let after = vm.devices();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after[0].address(), "AA:BB:CC:DD:EE:FF");
    assert_eq!(after[0].summary(), "2 readings");
}

#[tokio::test]
async fn open_navigates_to_displayed_device_only() {
    let repo = repo_with_cuff(0);
    let navigator = Arc::new(RecordingNavigator::default());
    let scope = SurfaceScope::new("devices");
    let vm = DevicesViewModel::new(repo, navigator.clone(), scope.handle());
    vm.refresh().await.unwrap();

    assert!(vm.open("00:00:00:00:00:00").is_err());
    vm.open("AA:BB:CC:DD:EE:FF").unwrap();
    assert_eq!(
        navigator.events(),
        vec![NavigationEvent::NavigateTo(Destination::DeviceDetail {
            address: "AA:BB:CC:DD:EE:FF".to_string()
        })]
    );
}

#[test]
fn ui_model_from_device_example() {
    let mut device = Device::new("AA:BB:CC:DD:EE:FF", "Scale");
    device.measurements = (0..3).map(reading).collect();
    let model = DeviceUiModel::from_device(&device);
    assert_eq!(model.address(), "AA:BB:CC:DD:EE:FF");
    assert_eq!(model.measurements_count(), 3);
    assert_eq!(model.summary(), "3 readings");
}
