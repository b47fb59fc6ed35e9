/// Mock implementations for testing
mod mock_device_repository;
mod mock_progress_reporter;

pub use mock_device_repository::MockDeviceRepository;
pub use mock_progress_reporter::MockProgressReporter;
