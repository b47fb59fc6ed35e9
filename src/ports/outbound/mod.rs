/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the inventory store, the clock, and the console.
pub mod clock;
pub mod device_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use clock::Clock;
pub use device_repository::DeviceRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
