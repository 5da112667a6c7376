//! Pinned dependency manifest (`requirements.txt`)

/// A single pinned package requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub version: String,
}

impl Requirement {
    /// Create an exact (`==`) pin
    pub fn pinned(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

/// Ordered dependency manifest for the target application
#[derive(Debug, Clone, Default)]
pub struct RequirementsManifest {
    pub requirements: Vec<Requirement>,
}

impl RequirementsManifest {
    /// Manifest for the Flask research-analysis app
    pub fn flask_app() -> Self {
        Self {
            requirements: vec![
                Requirement::pinned("Flask", "2.0.1"),
                Requirement::pinned("Werkzeug", "2.0.1"),
                Requirement::pinned("PyPDF2", "3.0.1"),
                Requirement::pinned("python-docx", "0.8.11"),
                Requirement::pinned("nltk", "3.6.3"),
                Requirement::pinned("beautifulsoup4", "4.9.3"),
                Requirement::pinned("requests", "2.26.0"),
            ],
        }
    }

    /// Render one `name==version` per line, no surrounding whitespace
    pub fn render(&self) -> String {
        self.requirements
            .iter()
            .map(|r| format!("{}=={}", r.name, r.version))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
