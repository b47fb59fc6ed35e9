//! Report read model consumed by formatters

/// Main read model for a rendered device report
#[derive(Debug, Clone)]
pub struct ReportReadModel {
    pub metadata: ReportMetadataView,
    pub report: ReportView,
    /// Report-specific columns, in display order (the name column is implicit)
    pub columns: Vec<ColumnView>,
    pub rows: Vec<DeviceRowView>,
    pub menu: Vec<MenuItemView>,
    /// Inventory size before filtering
    pub total_devices: usize,
}

#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub run_id: String,
    /// Reference date, `YYYY-MM-DD`
    pub reference_date: String,
}

#[derive(Debug, Clone)]
pub struct ReportView {
    pub key: String,
    pub label: String,
    pub display_label: String,
}

#[derive(Debug, Clone)]
pub struct ColumnView {
    pub key: String,
    pub header: String,
}

/// One device in the listing; `cells` line up with `ReportReadModel::columns`
#[derive(Debug, Clone)]
pub struct DeviceRowView {
    pub id: u64,
    pub name: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MenuItemView {
    pub key: String,
    pub label: String,
    pub selected: bool,
}
