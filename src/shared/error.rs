use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a denied license from
/// a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - document written, no denied licenses (or not asked to fail on them)
    Success = 0,
    /// `--fail-on-denied` was set and at least one result is denied
    DeniedLicenses = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, unsupported format, write failure, etc.)
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
            ExitCode::DeniedLicenses => write!(f, "Denied Licenses (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license result rendering.
///
/// Uses thiserror to derive Display and Error traits. Callers that need to
/// branch on the kind recover it from an `anyhow::Error` with `downcast_ref`.
#[derive(Debug, Error)]
pub enum BouncerError {
    #[error("Unsupported output format: '{format}'\n\n💡 Hint: Please specify one of 'text', 'csv' or 'json'")]
    UnsupportedFormat { format: String },

    #[error("Failed to write {format} output\nDetails: {details}\n\n💡 Hint: The output is incomplete and must not be used")]
    WriteFailed { format: String, details: String },

    #[error("License results not found: {path}\n\n💡 Hint: {suggestion}")]
    ResultsNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse license results: {source_name}\nDetails: {details}\n\n💡 Hint: Input must be a JSON array of {{\"dependency\", \"license\", \"outcome\"}} objects")]
    ResultsParseError {
        source_name: String,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl BouncerError {
    /// Builds a `WriteFailed` error for the given format token
    pub fn write_failed(format: impl fmt::Display, details: impl fmt::Display) -> Self {
        BouncerError::WriteFailed {
            format: format.to_string(),
            details: details.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::DeniedLicenses.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::DeniedLicenses),
            "Denied Licenses (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let error = BouncerError::UnsupportedFormat {
            format: "yaml".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unsupported output format"));
        assert!(display.contains("'yaml'"));
        assert!(display.contains("'text', 'csv' or 'json'"));
    }

    #[test]
    fn test_write_failed_display() {
        let error = BouncerError::write_failed("csv", "Broken pipe");
        let display = format!("{}", error);
        assert!(display.contains("Failed to write csv output"));
        assert!(display.contains("Broken pipe"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_results_parse_error_display() {
        let error = BouncerError::ResultsParseError {
            source_name: "results.json".to_string(),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse license results: results.json"));
        assert!(display.contains("expected value"));
        assert!(display.contains("\"dependency\""));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = BouncerError::FileWriteError {
            path: PathBuf::from("/test/report.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.csv"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = BouncerError::SecurityError {
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
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = BouncerError::UnsupportedFormat {
            format: "xml".to_string(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<BouncerError>(),
            Some(BouncerError::UnsupportedFormat { .. })
        ));
    }
}
