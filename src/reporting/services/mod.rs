mod device_sorter;
mod report_catalog;
mod report_selector;

pub use device_sorter::{DeviceSorter, SortColumn, SortDirection, SortSpec};
pub use report_catalog::{MenuItem, ReportCatalog, DEFAULT_REPORT_KEY};
pub use report_selector::{ReportSelection, ReportSelector};
