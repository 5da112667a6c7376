//! Static configuration payloads generated by codespacer
//!
//! This module contains the data structures for:
//! - `.devcontainer/devcontainer.json` - Dev container descriptor
//! - `requirements.txt` - Pinned dependency manifest
//! - `wsgi.py` / `pythonanywhere_config.py` - PythonAnywhere deployment files
//!
//! Every payload is a pure function of embedded constants, so repeated runs
//! produce byte-identical output.

pub mod devcontainer;
pub mod pythonanywhere;
pub mod requirements;

// Re-export commonly used types
pub use devcontainer::DevcontainerConfig;
pub use requirements::RequirementsManifest;
