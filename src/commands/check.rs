//! Check command implementation
//!
//! Reports the state of every generated target without writing anything.
//! A report, not a gate: the exit code is 0 regardless of findings.

use std::path::PathBuf;

use console::Style;

use crate::error::Result;
use crate::scaffold::{self, Target, TargetState};

/// Run check command
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let root = super::workspace_root(workspace)?;
    let targets = scaffold::codespace_targets()?;

    println!("Codespaces configuration in {}:", root.display());
    println!();

    let mut clean = true;
    for target in &targets {
        let state = target.state(&root);
        display_target(target, state);
        if state != TargetState::Current {
            clean = false;
        }
    }

    println!();
    if clean {
        println!(
            "{}",
            Style::new()
                .green()
                .apply_to("All configuration files are up to date.")
        );
    } else {
        println!("Run `codespacer setup` to create or refresh the files above.");
    }

    Ok(())
}

fn display_target(target: &Target, state: TargetState) {
    let label = match state {
        TargetState::Current => Style::new().green().apply_to("current "),
        TargetState::Stale => Style::new().yellow().apply_to("stale   "),
        TargetState::Missing => Style::new().red().apply_to("missing "),
        TargetState::Conflict => Style::new().red().bold().apply_to("conflict"),
    };
    println!("  {} {}", label, Style::new().dim().apply_to(target.path()));
}
