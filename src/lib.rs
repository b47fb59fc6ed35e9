//! device-reports - predefined device reports for asset inventories
//!
//! A fixed catalog of named reports ("no ping since 7 days", "support
//! expires in 30 days", ...), each a filter over device records plus the
//! columns worth showing. Selecting a report filters, deduplicates and
//! sorts an inventory and hands the result to a renderer.
//!
//! # Architecture
//!
//! - **Domain Layer** (`reporting`): report catalog, conditions, device model
//! - **Application Layer** (`application`): use case, DTOs, read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): inventory files, console, formatters, clock
//! - **Shared** (`shared`): error types and the result alias
//!
//! # Example
//!
//! ```no_run
//! use device_reports::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateReportUseCase::new(
//!     FileSystemInventoryReader::new(),
//!     StderrProgressReporter::new(),
//!     SystemClock::new(),
//! );
//!
//! let request = ReportRequest::new(
//!     PathBuf::from("inventory.json"),
//!     Some("support_expires30".to_string()),
//!     None,
//! );
//! let response = use_case.execute(request)?;
//!
//! let model = ReportReadModelBuilder::build(&response);
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod reporting;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::clock::{FixedClock, SystemClock};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemInventoryReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::inbound::ReportGenerationPort;
    pub use crate::ports::outbound::{
        Clock, DeviceRepository, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::reporting::domain::{
        Column, Deployment, DeploymentStatus, Device, DeviceId, IpAddress, ReportDefinition,
    };
    pub use crate::reporting::services::{
        MenuItem, ReportCatalog, ReportSelection, ReportSelector, SortColumn, SortDirection,
        SortSpec,
    };
    pub use crate::shared::Result;
}
