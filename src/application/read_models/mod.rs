//! Read models for rendering
//!
//! View-optimized structs: every cell is already a display string, so
//! formatters never touch domain types.

pub mod report_read_model;
pub mod report_read_model_builder;

pub use report_read_model::{
    ColumnView, DeviceRowView, MenuItemView, ReportMetadataView, ReportReadModel, ReportView,
};
pub use report_read_model_builder::ReportReadModelBuilder;
