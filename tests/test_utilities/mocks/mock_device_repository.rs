use device_reports::prelude::*;
use std::path::Path;

/// Mock DeviceRepository serving an in-memory inventory
pub struct MockDeviceRepository {
    pub devices: Vec<Device>,
    pub should_fail: bool,
}

impl MockDeviceRepository {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            devices: Vec::new(),
            should_fail: true,
        }
    }
}

impl DeviceRepository for MockDeviceRepository {
    fn load_devices(&self, _source: &Path) -> Result<Vec<Device>> {
        if self.should_fail {
            anyhow::bail!("Mock inventory read failure");
        }
        Ok(self.devices.clone())
    }
}
