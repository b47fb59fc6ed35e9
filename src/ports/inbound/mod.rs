/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define what external adapters (e.g., the CLI) can ask
/// of the application core.
pub mod report_generation_port;

pub use report_generation_port::ReportGenerationPort;
