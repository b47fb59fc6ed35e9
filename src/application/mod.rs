/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the reporting domain and reaches
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
