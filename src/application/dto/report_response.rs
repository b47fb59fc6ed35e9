use crate::reporting::domain::{Column, Device, ReportDefinition, ReportMetadata};
use crate::reporting::services::MenuItem;

/// ReportResponse - Internal response DTO from the report use case
///
/// Carries everything a renderer needs: the filtered devices, the report
/// label and columns, and the menu of available reports.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Matching devices, deduplicated and sorted
    pub devices: Vec<Device>,
    /// Report that was actually applied
    pub report: &'static ReportDefinition,
    /// Lower-cased report label
    pub label: String,
    pub columns: &'static [Column],
    pub menu_items: Vec<MenuItem>,
    pub metadata: ReportMetadata,
    /// Size of the inventory before filtering
    pub total_devices: usize,
}
