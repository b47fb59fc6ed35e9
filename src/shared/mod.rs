/// Shared utilities used across layers
pub mod error;
pub mod result;

pub use result::Result;
