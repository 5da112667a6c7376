//! Setup command implementation
//!
//! The core workflow: generate the dev container descriptor, the pinned
//! dependency manifest, and the uploads directory, then print what to do
//! next. Every step is idempotent, so the command is safe to re-run.

use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::SetupArgs;
use crate::config::{DevcontainerConfig, RequirementsManifest};
use crate::error::Result;
use crate::scaffold::{self, Target, TargetState, ensure_dir, write_file};

/// Run setup command
pub fn run(workspace: Option<PathBuf>, args: SetupArgs) -> Result<()> {
    let root = super::workspace_root(workspace)?;

    if args.dry_run {
        return dry_run(&root);
    }

    scaffold_workspace(&root)
}

/// Create the configuration targets under `root`, in fixed order
fn scaffold_workspace(root: &Path) -> Result<()> {
    println!("Setting up GitHub Codespaces configuration...");

    if ensure_dir(&root.join(scaffold::DEVCONTAINER_DIR))? {
        println!("Created .devcontainer directory");
    }

    let descriptor = DevcontainerConfig::flask_app().render()?;
    write_file(&root.join(scaffold::DEVCONTAINER_FILE), &descriptor)?;
    println!("Created devcontainer.json");

    let manifest = RequirementsManifest::flask_app().render();
    write_file(&root.join(scaffold::REQUIREMENTS_FILE), &manifest)?;
    println!("Created requirements.txt");

    if ensure_dir(&root.join(scaffold::UPLOADS_DIR))? {
        println!("Created uploads directory");
    }

    print_next_steps();

    Ok(())
}

/// Print the planned actions without touching the filesystem
fn dry_run(root: &Path) -> Result<()> {
    println!("Dry run: nothing will be written");

    for target in scaffold::codespace_targets()? {
        let verb = match (&target, target.state(root)) {
            (Target::Dir { .. }, TargetState::Current) => "keep",
            (Target::Dir { .. }, _) => "create",
            (Target::File { .. }, TargetState::Current) => "rewrite",
            (Target::File { .. }, TargetState::Missing) => "create",
            (Target::File { .. }, _) => "overwrite",
        };
        println!(
            "  {:9} {}",
            verb,
            Style::new().dim().apply_to(target.path())
        );
    }

    Ok(())
}

fn print_next_steps() {
    println!();
    println!("To fix the 404 error:");
    println!("1. Add these configuration files to your repository");
    println!("2. Rebuild your codespace (Command Palette -> Codespaces: Rebuild Container)");
    println!("3. When the container is ready, run:");
    println!("   python -m flask run --host=0.0.0.0");
    println!();
    println!("Your app will be available at:");
    println!("https://[codespace-name]-5000.preview.app.github.dev");
}
