//! codespacer - Codespaces deployment bootstrapper
//!
//! Repairs the cloud development environment setup for the Research Analysis
//! System Flask app: generates its dev container descriptor, pinned dependency
//! manifest, and uploads directory, and can emit PythonAnywhere deployment
//! files for the alternative hosting path.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod scaffold;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(cli.workspace, args),
        Commands::Check => commands::check::run(cli.workspace),
        Commands::Pythonanywhere(args) => commands::pythonanywhere::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
