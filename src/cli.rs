//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::pythonanywhere::DEFAULT_PROJECT_HOME;

/// codespacer - Codespaces deployment bootstrapper
///
/// Generates the configuration a Flask app needs to serve from a cloud
/// development environment.
#[derive(Parser, Debug)]
#[command(
    name = "codespacer",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Codespaces deployment bootstrapper for Flask apps",
    long_about = "Codespacer repairs the deployment setup of a Flask app in a cloud development \
                  environment: it generates the dev container descriptor, the pinned dependency \
                  manifest, and the uploads directory the app serves from.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  codespacer setup\n    \
                  codespacer setup --dry-run\n    \
                  codespacer check\n    \
                  codespacer pythonanywhere --project-home /home/user/app\n\n\
                  \x1b[1m\x1b[32mServing:\x1b[0m\n    \
                  python -m flask run --host=0.0.0.0"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the Codespaces configuration files
    Setup(SetupArgs),

    /// Report the state of the generated configuration files
    Check,

    /// Generate PythonAnywhere deployment files
    Pythonanywhere(PythonanywhereArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the setup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate the configuration in the current directory:\n    codespacer setup\n\n\
                  Preview without writing anything:\n    codespacer setup --dry-run\n\n\
                  Generate into another checkout:\n    codespacer setup -w ../my-app")]
pub struct SetupArgs {
    /// Print the planned actions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the pythonanywhere command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate with the default project home:\n    codespacer pythonanywhere\n\n\
                  Generate for a different checkout location:\n    \
                  codespacer pythonanywhere --project-home /home/user/research-app")]
pub struct PythonanywhereArgs {
    /// Project checkout location on the hosting account
    #[arg(long, default_value = DEFAULT_PROJECT_HOME)]
    pub project_home: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    codespacer completions --shell bash > ~/.bash_completion.d/codespacer\n\n\
                  Generate zsh completions:\n    codespacer completions --shell zsh > ~/.zfunc/_codespacer\n\n\
                  Generate fish completions:\n    codespacer completions --shell fish > ~/.config/fish/completions/codespacer.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_setup() {
        let cli = Cli::try_parse_from(["codespacer", "setup"]).unwrap();
        match cli.command {
            Commands::Setup(args) => assert!(!args.dry_run),
            _ => panic!("Expected Setup command"),
        }
    }

    #[test]
    fn test_cli_parsing_setup_dry_run() {
        let cli = Cli::try_parse_from(["codespacer", "setup", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Setup(args) => assert!(args.dry_run),
            _ => panic!("Expected Setup command"),
        }
    }

    #[test]
    fn test_cli_parsing_check() {
        let cli = Cli::try_parse_from(["codespacer", "check"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_cli_parsing_pythonanywhere_default_home() {
        let cli = Cli::try_parse_from(["codespacer", "pythonanywhere"]).unwrap();
        match cli.command {
            Commands::Pythonanywhere(args) => {
                assert_eq!(args.project_home, DEFAULT_PROJECT_HOME);
            }
            _ => panic!("Expected Pythonanywhere command"),
        }
    }

    #[test]
    fn test_cli_parsing_pythonanywhere_custom_home() {
        let cli = Cli::try_parse_from([
            "codespacer",
            "pythonanywhere",
            "--project-home",
            "/home/user/app",
        ])
        .unwrap();
        match cli.command {
            Commands::Pythonanywhere(args) => {
                assert_eq!(args.project_home, "/home/user/app");
            }
            _ => panic!("Expected Pythonanywhere command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["codespacer", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["codespacer", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_global_workspace_option() {
        let cli = Cli::try_parse_from(["codespacer", "-w", "/tmp/workspace", "setup"]).unwrap();
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["codespacer", "deploy"]).is_err());
    }
}
