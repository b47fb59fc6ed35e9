use crate::application::dto::{ReportRequest, ReportResponse};
use crate::reporting::domain::ReportDefinition;
use crate::shared::Result;

/// ReportGenerationPort - Inbound port for the device report use case
pub trait ReportGenerationPort {
    /// Runs the requested report over the inventory
    ///
    /// # Errors
    /// Returns an error if the inventory cannot be loaded. An unknown
    /// report key is not an error; the default report is used instead.
    fn generate_report(&self, request: ReportRequest) -> Result<ReportResponse>;

    /// Every available report, in menu order
    fn available_reports(&self) -> &'static [ReportDefinition];
}
