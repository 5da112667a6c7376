//! Dev container descriptor (`.devcontainer/devcontainer.json`)
//!
//! Field order matters: the descriptor is serialized in declaration order so
//! the generated file reads name, image, ports, post-create command, then
//! editor customizations.

use serde::Serialize;

use crate::error::Result;

/// Base image the container is provisioned from
pub const PYTHON_IMAGE: &str = "mcr.microsoft.com/devcontainers/python:3.8";

/// Port the Flask development server listens on
pub const FLASK_PORT: u16 = 5000;

/// Dev container descriptor structure (`devcontainer.json`)
#[derive(Debug, Clone, Serialize)]
pub struct DevcontainerConfig {
    /// Display label shown by the editor
    pub name: String,

    /// Base environment image identifier
    pub image: String,

    /// Ports exposed from the container, in order
    #[serde(rename = "forwardPorts")]
    pub forward_ports: Vec<u16>,

    /// Shell command run once after the container is provisioned
    #[serde(rename = "postCreateCommand")]
    pub post_create_command: String,

    /// Tool-specific settings (editor extensions)
    pub customizations: Customizations,
}

/// Tool-specific customization block
#[derive(Debug, Clone, Serialize)]
pub struct Customizations {
    pub vscode: VsCodeCustomizations,
}

/// VS Code extension identifiers installed into the container
#[derive(Debug, Clone, Serialize)]
pub struct VsCodeCustomizations {
    pub extensions: Vec<String>,
}

impl DevcontainerConfig {
    /// Descriptor for the Flask research-analysis app
    pub fn flask_app() -> Self {
        Self {
            name: "Python Flask App".to_string(),
            image: PYTHON_IMAGE.to_string(),
            forward_ports: vec![FLASK_PORT],
            post_create_command: "pip install -r requirements.txt".to_string(),
            customizations: Customizations {
                vscode: VsCodeCustomizations {
                    extensions: vec![
                        "ms-python.python".to_string(),
                        "ms-python.vscode-pylance".to_string(),
                    ],
                },
            },
        }
    }

    /// Render as 2-space-indented JSON, no trailing newline
    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
