/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: inventory files,
/// console output, renderers and the system clock.
pub mod outbound;
