use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets scripts tell argument mistakes apart from runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report rendered (an empty report is still a success)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (inventory, config or file I/O failure)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Device inventory not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse device inventory: {path}\nDetails: {details}\n\n💡 Hint: The inventory must be a JSON or YAML document with a top-level `devices` list. Dates use YYYY-MM-DD; `last_seen` uses RFC 3339 or YYYY-MM-DDTHH:MM:SS")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_inventory_not_found_display() {
        let error = ReportError::InventoryNotFound {
            path: PathBuf::from("/data/inventory.json"),
            suggestion: "Pass --inventory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Device inventory not found"));
        assert!(display.contains("/data/inventory.json"));
        assert!(display.contains("💡 Hint: Pass --inventory"));
    }

    #[test]
    fn test_inventory_parse_error_display() {
        let error = ReportError::InventoryParseError {
            path: PathBuf::from("inventory.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse device inventory"));
        assert!(display.contains("expected value at line 1"));
        assert!(display.contains("devices"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ReportError::FileWriteError {
            path: PathBuf::from("/test/report.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.md"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ReportError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = ReportError::Validation {
            message: "unknown sort column 'serial'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation error: unknown sort column 'serial'"
        );
    }
}
