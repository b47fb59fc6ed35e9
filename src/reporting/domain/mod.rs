pub mod column;
pub mod condition;
pub mod device;
pub mod report_definition;
pub mod report_metadata;

pub use column::Column;
pub use condition::{Condition, DateField, UnsetField};
pub use device::{Deployment, DeploymentStatus, Device, DeviceId, IpAddress};
pub use report_definition::ReportDefinition;
pub use report_metadata::ReportMetadata;
