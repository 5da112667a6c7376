//! PythonAnywhere deployment files (`wsgi.py`, `pythonanywhere_config.py`)
//!
//! Alternative hosting path for the same app: a WSGI entrypoint plus a small
//! config module pinning the upload folder and allowed extensions. Both are
//! pure functions of the project home path.

/// Default project checkout location on the hosting account
pub const DEFAULT_PROJECT_HOME: &str = "/workspaces/Research_Analysis_System";

/// Render the WSGI entrypoint (`wsgi.py`)
pub fn render_wsgi(project_home: &str) -> String {
    format!(
        r#"import sys
import os

# Add the project directory to sys.path
project_home = '{project_home}'
if project_home not in sys.path:
    sys.path.insert(0, project_home)

# Create the uploads folder if it doesn't exist
os.makedirs(os.path.join(project_home, 'uploads'), exist_ok=True)

# Import the Flask app from app.py
from app import app as application
"#
    )
}

/// Render the hosting configuration module (`pythonanywhere_config.py`)
pub fn render_config(project_home: &str) -> String {
    format!(
        r#"import os


class Config:
    UPLOAD_FOLDER = os.path.join('{project_home}', 'uploads')

    ALLOWED_EXTENSIONS = {{'pdf', 'docx', 'txt'}}

    # Debug must stay off on the hosted site
    DEBUG = False


def configure_app(app):
    app.config.from_object(Config)
"#
    )
}
