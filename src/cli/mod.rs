//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod provision;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Groundwork - one-shot post-generation provisioner for scaffolded projects.
#[derive(Parser)]
#[command(
    name = "groundwork",
    about = "Provision env files and prune the unused frontend variant",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Provision a freshly generated project
    Provision {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Generation context file (defaults to <DIR>/scaffold.json)
        #[arg(short, long)]
        context: Option<PathBuf>,

        /// Build and report the plan without touching disk
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a generation context without side effects
    Check {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Generation context file (defaults to <DIR>/scaffold.json)
        #[arg(short, long)]
        context: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Provision {
            dir,
            context,
            dry_run,
        } => provision::execute(&dir, context.as_deref(), dry_run),
        Check { dir, context } => check::execute(&dir, context.as_deref()),
        Completions { shell } => completions::execute(shell),
    }
}
