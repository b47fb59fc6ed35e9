use crate::application::dto::{ReportRequest, ReportResponse};
use crate::ports::inbound::ReportGenerationPort;
use crate::ports::outbound::{Clock, DeviceRepository, ProgressReporter};
use crate::reporting::domain::{Device, ReportDefinition, ReportMetadata};
use crate::reporting::services::{ReportCatalog, ReportSelector};
use crate::shared::Result;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// GenerateReportUseCase - runs one predefined report over the inventory
///
/// # Type Parameters
/// * `DR` - DeviceRepository implementation
/// * `PR` - ProgressReporter implementation
/// * `CL` - Clock implementation
pub struct GenerateReportUseCase<DR, PR, CL> {
    device_repository: DR,
    progress_reporter: PR,
    clock: CL,
}

impl<DR, PR, CL> GenerateReportUseCase<DR, PR, CL>
where
    DR: DeviceRepository,
    PR: ProgressReporter,
    CL: Clock,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(device_repository: DR, progress_reporter: PR, clock: CL) -> Self {
        Self {
            device_repository,
            progress_reporter,
            clock,
        }
    }

    /// Reporter the use case writes its progress to
    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Executes the report use case
    ///
    /// # Returns
    /// ReportResponse with the matching devices, label, columns and menu
    ///
    /// # Errors
    /// Only inventory loading can fail; report resolution falls back to
    /// the default report.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Load inventory
        let devices = self.load_inventory(&request)?;

        // Step 2: Resolve the report, warning when the request is not honoured
        let report = self.resolve_report(request.report_key.as_deref());

        // Step 3: Filter, deduplicate and sort
        let today = self.clock.today();
        let selection = ReportSelector::select(&devices, Some(report.key()), request.sort, today);
        self.progress_reporter.report(&format!(
            "🔎 Report \"{}\": {} of {} device(s) matched",
            selection.label,
            selection.devices.len(),
            devices.len()
        ));

        // Step 4: Build response
        Ok(ReportResponse {
            devices: selection.devices.into_iter().cloned().collect(),
            report: selection.definition,
            label: selection.label,
            columns: selection.columns,
            menu_items: ReportCatalog::menu_items(selection.definition),
            metadata: Self::build_metadata(today),
            total_devices: devices.len(),
        })
    }

    fn load_inventory(&self, request: &ReportRequest) -> Result<Vec<Device>> {
        self.progress_reporter.report(&format!(
            "📖 Loading device inventory from: {}",
            request.inventory_path.display()
        ));

        let devices = self
            .device_repository
            .load_devices(&request.inventory_path)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} device(s)", devices.len()));

        Ok(devices)
    }

    fn resolve_report(&self, requested: Option<&str>) -> &'static ReportDefinition {
        let report = ReportCatalog::lookup(requested);
        if let Some(key) = requested.filter(|key| !key.is_empty()) {
            if report.key() != key {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Unknown report '{}', showing '{}' instead.",
                    key,
                    report.key()
                ));
            }
        }
        report
    }

    fn build_metadata(today: chrono::NaiveDate) -> ReportMetadata {
        ReportMetadata::new(
            chrono::Utc::now().to_rfc3339(),
            TOOL_NAME.to_string(),
            TOOL_VERSION.to_string(),
            format!("urn:uuid:{}", uuid::Uuid::new_v4()),
            today,
        )
    }
}

impl<DR, PR, CL> ReportGenerationPort for GenerateReportUseCase<DR, PR, CL>
where
    DR: DeviceRepository,
    PR: ProgressReporter,
    CL: Clock,
{
    fn generate_report(&self, request: ReportRequest) -> Result<ReportResponse> {
        self.execute(request)
    }

    fn available_reports(&self) -> &'static [ReportDefinition] {
        ReportCatalog::all()
    }
}
