use crate::reporting::services::SortSpec;
use std::path::PathBuf;

/// ReportRequest - Internal request DTO for the report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the device inventory file
    pub inventory_path: PathBuf,
    /// Requested report key; absent or unknown keys use the default report
    pub report_key: Option<String>,
    /// Already-validated sort specification
    pub sort: Option<SortSpec>,
}

impl ReportRequest {
    pub fn new(inventory_path: PathBuf, report_key: Option<String>, sort: Option<SortSpec>) -> Self {
        Self {
            inventory_path,
            report_key,
            sort,
        }
    }
}
