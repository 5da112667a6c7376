//! PythonAnywhere command implementation
//!
//! Generates the WSGI entrypoint and hosting configuration used when the app
//! is deployed on PythonAnywhere instead of a codespace.

use std::path::PathBuf;

use crate::cli::PythonanywhereArgs;
use crate::config::pythonanywhere::{render_config, render_wsgi};
use crate::error::Result;
use crate::scaffold::write_file;

/// WSGI entrypoint path
pub const WSGI_FILE: &str = "wsgi.py";

/// Hosting configuration module path
pub const CONFIG_FILE: &str = "pythonanywhere_config.py";

/// Run pythonanywhere command
pub fn run(workspace: Option<PathBuf>, args: PythonanywhereArgs) -> Result<()> {
    let root = super::workspace_root(workspace)?;

    println!("Generating PythonAnywhere deployment files...");

    write_file(&root.join(WSGI_FILE), &render_wsgi(&args.project_home))?;
    println!("Created wsgi.py");

    write_file(&root.join(CONFIG_FILE), &render_config(&args.project_home))?;
    println!("Created pythonanywhere_config.py");

    println!();
    println!("Next steps:");
    println!("1. Upload the project to {}", args.project_home);
    println!("2. Point the web app's WSGI configuration file at wsgi.py");
    println!("3. Reload the web app from the PythonAnywhere dashboard");

    Ok(())
}
