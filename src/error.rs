//! Error types and handling for codespacer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for codespacer operations
///
/// Every failure mode is a filesystem failure of some shape; none are caught
/// anywhere, they propagate to `main` which exits non-zero.
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(codespacer::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Path exists but is not a directory: {path}")]
    #[diagnostic(
        code(codespacer::fs::path_not_directory),
        help("Remove or rename the conflicting file, then re-run `codespacer setup`")
    )]
    PathNotDirectory { path: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(codespacer::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to render configuration: {reason}")]
    #[diagnostic(code(codespacer::config::render_failed))]
    ConfigRenderFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(codespacer::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        SetupError::ConfigRenderFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SetupError::PathNotDirectory {
            path: "uploads".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Path exists but is not a directory: uploads"
        );
    }

    #[test]
    fn test_error_code() {
        let err = SetupError::PathNotDirectory {
            path: "uploads".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("codespacer::fs::path_not_directory".to_string())
        );
    }

    #[test]
    fn test_dir_create_failed_display() {
        let err = SetupError::DirCreateFailed {
            path: ".devcontainer".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains(".devcontainer"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_file_write_failed_display() {
        let err = SetupError::FileWriteFailed {
            path: "requirements.txt".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("Failed to write file"));
        assert!(err.to_string().contains("requirements.txt"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::IoError { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("not json");
        let json_err = parse_result.unwrap_err();
        let err: SetupError = json_err.into();
        assert!(matches!(err, SetupError::ConfigRenderFailed { .. }));
    }
}
