/// Reporting domain - report catalog, device model and selection logic
///
/// Pure data and pure functions; no I/O happens in this layer.
pub mod domain;
pub mod services;
