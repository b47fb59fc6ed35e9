use crate::reporting::domain::Device;
use crate::shared::Result;
use std::path::Path;

/// DeviceRepository port for loading the device inventory
///
/// This port abstracts where device records come from. Reports only
/// ever borrow the loaded collection.
pub trait DeviceRepository {
    /// Loads every device of the inventory at `source`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The inventory does not exist or cannot be read
    /// - The content is not a valid inventory document
    fn load_devices(&self, source: &Path) -> Result<Vec<Device>>;
}
