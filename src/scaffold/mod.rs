//! Scaffolding model: the fixed set of filesystem targets the tool maintains
//!
//! `setup` creates the targets in order; `check` classifies each one against
//! the filesystem without writing anything.

pub mod file_ops;

pub use file_ops::{ensure_dir, write_file};

use std::path::Path;

use crate::config::{DevcontainerConfig, RequirementsManifest};
use crate::error::Result;

/// Directory holding the dev container descriptor
pub const DEVCONTAINER_DIR: &str = ".devcontainer";

/// Dev container descriptor path
pub const DEVCONTAINER_FILE: &str = ".devcontainer/devcontainer.json";

/// Dependency manifest path
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Upload directory used by the running app
pub const UPLOADS_DIR: &str = "uploads";

/// A filesystem target the scaffolder maintains
#[derive(Debug, Clone)]
pub enum Target {
    /// Directory created only if absent
    Dir { path: &'static str },
    /// File overwritten with rendered content on every run
    File {
        path: &'static str,
        content: String,
    },
}

/// Observed state of a target relative to a workspace root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Matches the current render
    Current,
    /// File exists but its content differs from the current render
    Stale,
    /// Does not exist
    Missing,
    /// Exists with the wrong filesystem kind
    Conflict,
}

impl Target {
    /// Workspace-relative path of this target
    pub fn path(&self) -> &'static str {
        match self {
            Target::Dir { path } => path,
            Target::File { path, .. } => path,
        }
    }

    /// Classify this target against the filesystem under `root`
    pub fn state(&self, root: &Path) -> TargetState {
        let full = root.join(self.path());
        match self {
            Target::Dir { .. } => {
                if !full.exists() {
                    TargetState::Missing
                } else if full.is_dir() {
                    TargetState::Current
                } else {
                    TargetState::Conflict
                }
            }
            Target::File { content, .. } => {
                if !full.exists() {
                    TargetState::Missing
                } else if full.is_dir() {
                    TargetState::Conflict
                } else {
                    match std::fs::read_to_string(&full) {
                        Ok(found) if found == *content => TargetState::Current,
                        _ => TargetState::Stale,
                    }
                }
            }
        }
    }
}

/// The Codespaces targets, in creation order
pub fn codespace_targets() -> Result<Vec<Target>> {
    Ok(vec![
        Target::Dir {
            path: DEVCONTAINER_DIR,
        },
        Target::File {
            path: DEVCONTAINER_FILE,
            content: DevcontainerConfig::flask_app().render()?,
        },
        Target::File {
            path: REQUIREMENTS_FILE,
            content: RequirementsManifest::flask_app().render(),
        },
        Target::Dir { path: UPLOADS_DIR },
    ])
}
