//! Command implementations for the codespacer CLI

pub mod check;
pub mod completions;
pub mod pythonanywhere;
pub mod setup;
pub mod version;

use std::path::PathBuf;

use crate::error::{Result, SetupError};

/// Resolve the workspace root from the CLI argument or the current directory
pub fn workspace_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| SetupError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
