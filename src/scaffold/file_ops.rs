//! Low-level filesystem operations for scaffolding
//!
//! This module handles:
//! - Idempotent directory creation (ensure_dir)
//! - Unconditional file overwrite (write_file)

use std::path::Path;

use crate::error::{Result, SetupError};

fn dir_create_error(path: &Path, e: std::io::Error) -> SetupError {
    SetupError::DirCreateFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn file_write_error(path: &Path, e: std::io::Error) -> SetupError {
    SetupError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure a directory exists. Returns `true` when this call created it.
///
/// A path that exists as anything other than a directory is an error; creating
/// over it would leave the setup silently broken.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.exists() {
        if path.is_dir() {
            return Ok(false);
        }
        return Err(SetupError::PathNotDirectory {
            path: path.display().to_string(),
        });
    }
    std::fs::create_dir(path).map_err(|e| dir_create_error(path, e))?;
    Ok(true)
}

/// Overwrite the target file with the given content (no existence check)
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| file_write_error(path, e))
}
